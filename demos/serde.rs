use difftok::tokenize_text;

fn main() {
    let tokens = tokenize_text("a\nb", "a\nc");
    println!("{}", serde_json::to_string_pretty(&tokens).unwrap());
}

use console::Style;
use difftok::{tokenize_text, TokenKind};

fn main() {
    let tokens = tokenize_text(
        "pub fn greet(name: &str) {\n    println!(\"Hello {}\", name);\n}\n",
        "pub fn greet(name: &str) {\n    println!(\"Goodbye {}\", name);\n    println!(\"bye\");\n}\n",
    );

    for token in tokens {
        let style = match token.kind() {
            TokenKind::DelSymbol | TokenKind::DelLine => Style::new().red(),
            TokenKind::AddSymbol | TokenKind::AddLine => Style::new().green(),
            TokenKind::SameSymbol => Style::new().dim(),
            _ => Style::new(),
        };
        print!("{}", style.apply_to(token.literal()));
    }
}

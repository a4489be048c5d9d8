use console::Style;
use difftok::{tokenize_line, Token, TokenKind};

fn print_side(sign: &str, style: &Style, tokens: &[Token]) {
    print!("{} ", style.apply_to(sign).bold());
    for token in tokens {
        let styled = style.apply_to(token.literal());
        if token.kind() == TokenKind::SameWords {
            print!("{} ", styled);
        } else {
            print!("{} ", styled.underlined());
        }
    }
    println!();
}

fn main() {
    let (old_tokens, new_tokens) =
        tokenize_line("the quick brown fox", "the slow brown cat");

    print_side("-", &Style::new().red(), &old_tokens);
    print_side("+", &Style::new().green(), &new_tokens);
}

use logos::Logos;

#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    // Comments and whitespace (skipped)
    #[regex(r"(#|//)[^\n]*", logos::skip, priority = 10)]
    #[regex(r"[ \t\r]+", logos::skip)]
    Comment,

    // Commands end at a newline
    #[token("\n")]
    Newline,

    // Keywords
    #[token("source")]
    Source,

    #[token("tracker")]
    Tracker,

    #[token("attach")]
    Attach,

    #[token("to")]
    To,

    #[token("focus")]
    Focus,

    #[token("none")]
    None,

    #[token("press")]
    Press,

    #[token("release")]
    Release,

    #[token("type")]
    Type,

    #[token("clear")]
    Clear,

    #[token("show")]
    Show,

    #[token("expect")]
    Expect,

    // Delimiters
    #[token(",")]
    Comma,

    // String literals
    #[regex(r#""([^"\\\n]|\\.)*""#, |lex| {
        let s = lex.slice();
        unescape(&s[1..s.len() - 1])
    })]
    String(String),

    // Source, tracker and key names
    #[regex(r##"[^ \t\r\n,"#]+"##, |lex| lex.slice().to_string())]
    Name(String),
}

fn unescape(s: &str) -> String {
    let mut result = String::new();
    let mut chars = s.chars();

    while let Some(ch) = chars.next() {
        if ch == '\\' {
            match chars.next() {
                Some('n') => result.push('\n'),
                Some('t') => result.push('\t'),
                Some(other) => result.push(other),
                None => result.push('\\'),
            }
        } else {
            result.push(ch);
        }
    }

    result
}

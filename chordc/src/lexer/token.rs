use logos::Logos;

/// Unescapes a quoted literal; `None` on an unknown escape
fn unescape(quoted: &str) -> Option<String> {
    let body = &quoted[1..quoted.len() - 1];
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        out.push(match chars.next()? {
            'n' => '\n',
            't' => '\t',
            'b' => '\u{8}',
            '\\' => '\\',
            '"' => '"',
            _ => return None,
        });
    }
    Some(out)
}

#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    // Comments and whitespace (skipped)
    #[regex(r"//[^\n]*", logos::skip)]
    #[regex(r"/\*([^*]|\*[^/])*\*/", logos::skip)]
    #[regex(r"[ \t\r\n]+", logos::skip)]
    Comment,

    #[token("=>")]
    Arrow,

    #[token("+")]
    Plus,

    #[token("<")]
    LAngle,

    #[token(">")]
    RAngle,

    // String literals
    #[regex(r#""([^"\\\n]|\\.)*""#, |lex| unescape(lex.slice()))]
    String(String),

    // Raw HID code inside `<...>`
    #[regex(r"0[xX][0-9a-fA-F]{1,2}", |lex| u8::from_str_radix(&lex.slice()[2..], 16).ok())]
    Code(u8),

    // Family keywords, key names, locale names
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
}

impl Token {
    pub fn is_identifier(&self, word: &str) -> bool {
        matches!(self, Token::Identifier(id) if id == word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_tokens() {
        let input = r#"left S T => "st" + <enter>"#;
        let mut lex = Token::lexer(input);

        assert_eq!(lex.next(), Some(Ok(Token::Identifier("left".to_string()))));
        assert_eq!(lex.next(), Some(Ok(Token::Identifier("S".to_string()))));
        assert_eq!(lex.next(), Some(Ok(Token::Identifier("T".to_string()))));
        assert_eq!(lex.next(), Some(Ok(Token::Arrow)));
        assert_eq!(lex.next(), Some(Ok(Token::String("st".to_string()))));
        assert_eq!(lex.next(), Some(Ok(Token::Plus)));
        assert_eq!(lex.next(), Some(Ok(Token::LAngle)));
        assert_eq!(lex.next(), Some(Ok(Token::Identifier("enter".to_string()))));
        assert_eq!(lex.next(), Some(Ok(Token::RAngle)));
        assert_eq!(lex.next(), None);
    }

    #[test]
    fn test_escapes() {
        let mut lex = Token::lexer(r#""a\n\t\b\\""#);
        assert_eq!(lex.next(), Some(Ok(Token::String("a\n\t\u{8}\\".to_string()))));

        let mut lex = Token::lexer(r#""\q""#);
        assert!(matches!(lex.next(), Some(Err(_))));
    }

    #[test]
    fn test_raw_code() {
        let mut lex = Token::lexer("<0x2D> <0X4c>");
        assert_eq!(lex.next(), Some(Ok(Token::LAngle)));
        assert_eq!(lex.next(), Some(Ok(Token::Code(0x2D))));
        assert_eq!(lex.next(), Some(Ok(Token::RAngle)));
        assert_eq!(lex.next(), Some(Ok(Token::LAngle)));
        assert_eq!(lex.next(), Some(Ok(Token::Code(0x4C))));
    }

    #[test]
    fn test_comments_skipped() {
        let input = "// comment\nspaces /* block */ SPC";
        let mut lex = Token::lexer(input);

        assert_eq!(lex.next(), Some(Ok(Token::Identifier("spaces".to_string()))));
        assert_eq!(lex.next(), Some(Ok(Token::Identifier("SPC".to_string()))));
        assert_eq!(lex.next(), None);
    }
}

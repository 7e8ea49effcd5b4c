use logos::{Logos, Lexer as LogosLexer};
use steno_core::ChordsError;
use super::Token;

pub struct Lexer<'a> {
    inner: LogosLexer<'a, Token>,
    current_line: usize,
    /// End of the last consumed token
    last_end: usize,
    pub input: &'a str,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: Token::lexer(input),
            current_line: 1,
            last_end: 0,
            input,
        }
    }

    pub fn next_token(&mut self) -> Result<Option<Token>, ChordsError> {
        let next = self.inner.next();
        let span = self.inner.span();

        // Count newlines skipped since the previous token
        let start = span.start.max(self.last_end);
        self.current_line += self.input[self.last_end..start].matches('\n').count();
        self.last_end = span.end.max(start);

        match next {
            Some(Ok(token)) => Ok(Some(token)),
            Some(Err(_)) => Err(ChordsError::Parse {
                line: self.current_line,
                message: format!("Unexpected token: '{}'", &self.input[span.start..span.end]),
            }),
            None => Ok(None),
        }
    }

    /// Line of the last token returned
    pub fn current_line(&self) -> usize {
        self.current_line
    }

    pub fn peek(&self) -> Option<Token> {
        self.inner.clone().next().and_then(|r| r.ok())
    }

    pub fn collect_all(mut self) -> Result<Vec<Token>, ChordsError> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }
        Ok(tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lexer_line_tracking() {
        let input = "left\n\n// note\nS\n=>";
        let mut lexer = Lexer::new(input);

        assert!(matches!(lexer.next_token().unwrap(), Some(Token::Identifier(_))));
        assert_eq!(lexer.current_line(), 1);

        assert!(matches!(lexer.next_token().unwrap(), Some(Token::Identifier(_))));
        assert_eq!(lexer.current_line(), 4);

        assert_eq!(lexer.next_token().unwrap(), Some(Token::Arrow));
        assert_eq!(lexer.current_line(), 5);
    }

    #[test]
    fn test_error_reports_line() {
        let mut lexer = Lexer::new("left\nS ? T");
        lexer.next_token().unwrap();
        lexer.next_token().unwrap();
        match lexer.next_token() {
            Err(ChordsError::Parse { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_collect_all() {
        let tokens = Lexer::new("spaces SPC => \" \"").collect_all().unwrap();
        assert_eq!(tokens.len(), 4);
    }
}

use crate::lexer::{Lexer, Token};
use steno_core::ChordsError;
use super::ast::*;

pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Option<Token>,
    /// Line of `current`
    line: usize,
    /// First lexer error, reported by `parse`
    pending_error: Option<ChordsError>,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Self {
        let mut lexer = Lexer::new(input);
        let (current, pending_error) = match lexer.next_token() {
            Ok(token) => (token, None),
            Err(e) => (None, Some(e)),
        };
        let line = lexer.current_line();

        Self {
            lexer,
            current,
            line,
            pending_error,
        }
    }

    pub fn parse(&mut self) -> Result<ChordsFile, ChordsError> {
        if let Some(e) = self.pending_error.take() {
            return Err(e);
        }

        let mut ast = ChordsFile::new();

        while let Some(token) = &self.current {
            if token.is_identifier("locale") {
                let decl = self.parse_locale()?;
                if let Some(first) = &ast.locale {
                    return Err(ChordsError::Parse {
                        line: decl.line,
                        message: format!("Locale already set at line {}", first.line),
                    });
                }
                ast.locale = Some(decl);
            } else {
                let chord = self.parse_chord()?;
                ast.chords.push(chord);
            }
        }

        Ok(ast)
    }

    fn advance(&mut self) -> Result<(), ChordsError> {
        self.current = self.lexer.next_token()?;
        self.line = self.lexer.current_line();
        Ok(())
    }

    fn expect(&mut self, expected: Token) -> Result<(), ChordsError> {
        if self.current.as_ref() != Some(&expected) {
            return Err(self.error(format!("Expected {:?}, found {:?}", expected, self.current)));
        }
        self.advance()
    }

    fn error(&self, message: String) -> ChordsError {
        ChordsError::Parse {
            line: self.line,
            message,
        }
    }

    fn expect_identifier(&mut self, what: &str) -> Result<String, ChordsError> {
        match &self.current {
            Some(Token::Identifier(id)) => {
                let id = id.clone();
                self.advance()?;
                Ok(id)
            }
            other => Err(self.error(format!("Expected {}, found {:?}", what, other))),
        }
    }

    fn parse_locale(&mut self) -> Result<LocaleDecl, ChordsError> {
        let line = self.line;
        self.advance()?;
        let name = self.expect_identifier("locale name")?;
        Ok(LocaleDecl { name, line })
    }

    fn parse_chord(&mut self) -> Result<ChordDecl, ChordsError> {
        let line = self.line;
        let family = self.expect_identifier("key family")?;

        let mut keys = Vec::new();
        while let Some(Token::Identifier(key)) = &self.current {
            keys.push(key.clone());
            self.advance()?;
        }
        if keys.is_empty() {
            return Err(self.error(format!("Chord '{}' has no keys", family)));
        }

        self.expect(Token::Arrow)?;
        let output = self.parse_output()?;

        Ok(ChordDecl {
            line,
            family,
            keys,
            output,
        })
    }

    /// Output items, juxtaposed or joined with `+`
    fn parse_output(&mut self) -> Result<Vec<OutputElement>, ChordsError> {
        let mut elements = Vec::new();

        loop {
            match &self.current {
                Some(Token::String(s)) => {
                    elements.push(OutputElement::Text(s.clone()));
                    self.advance()?;
                }
                Some(Token::LAngle) => {
                    self.advance()?;
                    let element = match &self.current {
                        Some(Token::Code(code)) => {
                            let code = *code;
                            self.advance()?;
                            OutputElement::Code(code)
                        }
                        _ => OutputElement::Key(self.expect_identifier("output key name")?),
                    };
                    self.expect(Token::RAngle)?;
                    elements.push(element);
                }
                Some(Token::Plus) if !elements.is_empty() => {
                    self.advance()?;
                    if !matches!(self.current, Some(Token::String(_)) | Some(Token::LAngle)) {
                        return Err(self.error("Expected output after '+'".to_string()));
                    }
                }
                _ => break,
            }
        }

        if elements.is_empty() {
            return Err(self.error("Expected chord output".to_string()));
        }

        Ok(elements)
    }
}

//! Tokenizer and recursive-descent parser for the topology notation.

use std::collections::BTreeMap;

use log::trace;

use crate::graph::{Network, NodeContainer, Pattern};
use crate::types::{NetworkError, NetworkResult, NodeId};

#[derive(Debug, Clone, PartialEq)]
enum TokenKind {
    Ident(String),
    Op(Pattern),
    Comma,
    Open,
    Close,
    Separator,
    End,
}

#[derive(Debug, Clone)]
struct Token {
    kind: TokenKind,
    position: usize,
}

fn parse_error(position: usize, message: impl Into<String>) -> NetworkError {
    NetworkError::Parse {
        position,
        message: message.into(),
    }
}

fn tokenize(source: &str) -> NetworkResult<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut chars = source.char_indices().peekable();

    while let Some((position, c)) = chars.next() {
        let kind = match c {
            '#' => {
                // Comment runs to end of line; the newline still separates.
                while chars.peek().is_some_and(|&(_, c)| c != '\n') {
                    chars.next();
                }
                continue;
            }
            '\n' | ';' => TokenKind::Separator,
            c if c.is_whitespace() => continue,
            '-' => TokenKind::Op(Pattern::Series),
            '^' => TokenKind::Op(Pattern::Heads),
            '*' => TokenKind::Op(Pattern::AllPairs),
            '|' => TokenKind::Op(Pattern::Parallel),
            '~' => TokenKind::Op(Pattern::EndpointsOnly),
            ',' => TokenKind::Comma,
            '(' => TokenKind::Open,
            ')' => TokenKind::Close,
            c if c.is_ascii_alphanumeric() || c == '_' => {
                let mut name = String::from(c);
                while let Some(&(_, next)) = chars.peek() {
                    if next.is_ascii_alphanumeric() || next == '_' {
                        name.push(next);
                        chars.next();
                    } else {
                        break;
                    }
                }
                TokenKind::Ident(name)
            }
            other => {
                return Err(parse_error(
                    position,
                    format!("unexpected character '{other}'"),
                ))
            }
        };
        tokens.push(Token { kind, position });
    }

    tokens.push(Token {
        kind: TokenKind::End,
        position: source.len(),
    });
    Ok(tokens)
}

/// Parses notation into an existing network, sharing a symbol table.
pub(super) struct Parser<'a> {
    tokens: Vec<Token>,
    cursor: usize,
    network: &'a mut Network<String>,
    symbols: &'a mut BTreeMap<String, NodeId>,
}

impl<'a> Parser<'a> {
    pub(super) fn new(
        source: &str,
        network: &'a mut Network<String>,
        symbols: &'a mut BTreeMap<String, NodeId>,
    ) -> NetworkResult<Self> {
        Ok(Self {
            tokens: tokenize(source)?,
            cursor: 0,
            network,
            symbols,
        })
    }

    fn peek(&self) -> &Token {
        // The token list always ends with `End`, which is never consumed.
        &self.tokens[self.cursor.min(self.tokens.len() - 1)]
    }

    fn advance(&mut self) -> Token {
        let token = self.peek().clone();
        if token.kind != TokenKind::End {
            self.cursor += 1;
        }
        token
    }

    /// statements := list? (SEP list?)* END
    pub(super) fn parse_statements(&mut self) -> NetworkResult<NodeContainer> {
        let mut result = NodeContainer::new();
        loop {
            match self.peek().kind {
                TokenKind::End => break,
                TokenKind::Separator => {
                    self.advance();
                }
                _ => {
                    let statement = self.parse_list()?;
                    result.union_in_place(self.network, &statement)?;
                    let token = self.peek();
                    match token.kind {
                        TokenKind::Separator | TokenKind::End => {}
                        _ => {
                            return Err(parse_error(
                                token.position,
                                "expected operator, ',' or end of statement",
                            ))
                        }
                    }
                }
            }
        }
        Ok(result)
    }

    /// list := chain (',' chain)*
    fn parse_list(&mut self) -> NetworkResult<NodeContainer> {
        let mut acc = self.parse_chain()?;
        while self.peek().kind == TokenKind::Comma {
            self.advance();
            let rhs = self.parse_chain()?;
            acc.union_in_place(self.network, &rhs)?;
        }
        Ok(acc)
    }

    /// chain := term (op term)*
    fn parse_chain(&mut self) -> NetworkResult<NodeContainer> {
        let mut acc = self.parse_term()?;
        while let TokenKind::Op(pattern) = self.peek().kind {
            self.advance();
            let rhs = self.parse_term()?;
            trace!("{} ({} nodes) with {} nodes", pattern, acc.len(), rhs.len());
            acc.compose_in_place(self.network, pattern, &rhs)?;
        }
        Ok(acc)
    }

    /// term := IDENT | '(' ')' | '(' list ')'
    fn parse_term(&mut self) -> NetworkResult<NodeContainer> {
        let token = self.advance();
        match token.kind {
            TokenKind::Ident(name) => Ok(NodeContainer::from(self.symbol(name))),
            TokenKind::Open => {
                if self.peek().kind == TokenKind::Close {
                    self.advance();
                    return Ok(NodeContainer::new());
                }
                let inner = self.parse_list()?;
                let close = self.advance();
                if close.kind != TokenKind::Close {
                    return Err(parse_error(close.position, "expected ')'"));
                }
                Ok(inner)
            }
            _ => Err(parse_error(token.position, "expected node name or '('")),
        }
    }

    fn symbol(&mut self, name: String) -> NodeId {
        if let Some(&id) = self.symbols.get(&name) {
            return id;
        }
        let id = self.network.add_node(name.clone());
        self.symbols.insert(name, id);
        id
    }
}

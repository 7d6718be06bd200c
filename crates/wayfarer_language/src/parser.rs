//! Parser for the world definition language.
//!
//! ```text
//! game       := "game" STRING STRING STRING location+
//! location   := "location" ID STRING STRING [ NUMBER STRING ] item* connection*
//! item       := "item" STRING STRING NUMBER
//! connection := DIRKEYWORD ID
//! ```
//!
//! Parsing happens in two passes. The first reads every location clause and
//! keeps its connections as pending `(direction, target id)` pairs, so a
//! connection may name a location declared further down. The second pass
//! builds the [`WorldMap`] and resolves the pending connections.

use std::io::Read;

use wayfarer_foundation::{Direction, Error, Result};
use wayfarer_world::{Game, Item, Location, LocationId, WorldMap};

use crate::lexer::Lexer;
use crate::token::{Token, TokenKind};

/// A fully linked world, ready to be turned into a [`Game`].
#[derive(Clone, Debug)]
pub struct GameDefinition {
    /// Game title.
    pub title: String,
    /// Game author.
    pub author: String,
    /// Game description.
    pub description: String,
    /// Every declared location, linked.
    pub map: WorldMap,
    /// The first declared location.
    pub initial: LocationId,
}

impl GameDefinition {
    /// Starts a game in this world.
    ///
    /// # Errors
    ///
    /// Returns `UnknownLocation` if `initial` is not part of `map`.
    pub fn into_game<C>(self) -> Result<Game<C>> {
        Game::with_map(
            self.title,
            self.author,
            self.description,
            self.map,
            self.initial,
        )
    }
}

/// Turns definition text into a [`GameDefinition`].
///
/// By default a connection naming an undeclared location is dropped with a
/// warning. A strict parser rejects the definition instead.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefinitionParser {
    strict: bool,
}

impl DefinitionParser {
    /// Creates a permissive parser.
    #[must_use]
    pub const fn new() -> Self {
        Self { strict: false }
    }

    /// Creates a parser that rejects dangling connections.
    #[must_use]
    pub const fn strict() -> Self {
        Self { strict: true }
    }

    /// Sets whether dangling connections are rejected.
    #[must_use]
    pub const fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Returns true if dangling connections are rejected.
    #[must_use]
    pub const fn is_strict(&self) -> bool {
        self.strict
    }

    /// Parses a complete definition.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDefinition` naming the offending line if the text is
    /// empty, malformed, or (in strict mode) links to an undeclared location.
    pub fn parse(&self, source: &str) -> Result<GameDefinition> {
        let outline = Parser::new(source).parse_outline()?;
        self.build(outline)
    }

    /// Reads a whole definition from `reader` and parses it.
    ///
    /// # Errors
    ///
    /// Returns `Io` if reading fails, otherwise as [`DefinitionParser::parse`].
    pub fn parse_reader(&self, mut reader: impl Read) -> Result<GameDefinition> {
        let mut source = String::new();
        reader.read_to_string(&mut source)?;
        self.parse(&source)
    }

    fn build(&self, outline: Outline) -> Result<GameDefinition> {
        let mut map = WorldMap::new();
        let mut initial = None;
        let mut pending = Vec::with_capacity(outline.clauses.len());

        for clause in outline.clauses {
            if map.lookup(&clause.id).is_some() {
                return Err(Error::invalid_definition(
                    clause.id_line,
                    format!("duplicate location id '{}'", clause.id),
                ));
            }
            let id = map.add(clause.id, clause.location);
            initial.get_or_insert(id);
            pending.push((id, clause.links));
        }

        let Some(initial) = initial else {
            return Err(Error::invalid_definition(
                outline.end_line,
                "game definition has no locations",
            ));
        };

        for (from, links) in pending {
            for link in links {
                match map.lookup(&link.target) {
                    Some(to) => map.link(from, link.direction, to)?,
                    None if self.strict => {
                        return Err(Error::invalid_definition(
                            link.line,
                            format!(
                                "connection '{}' from '{}' leads to unknown location '{}'",
                                link.direction.keyword(),
                                map.key(from).unwrap_or_default(),
                                link.target
                            ),
                        ));
                    }
                    None => log::warn!(
                        "line {}: dropping connection '{}' from '{}' to unknown location '{}'",
                        link.line,
                        link.direction.keyword(),
                        map.key(from).unwrap_or_default(),
                        link.target
                    ),
                }
            }
        }

        Ok(GameDefinition {
            title: outline.title,
            author: outline.author,
            description: outline.description,
            map,
            initial,
        })
    }
}

/// Parses a definition with the permissive parser.
///
/// # Errors
///
/// See [`DefinitionParser::parse`].
pub fn parse_definition(source: &str) -> Result<GameDefinition> {
    DefinitionParser::new().parse(source)
}

/// Result of the first pass.
struct Outline {
    title: String,
    author: String,
    description: String,
    clauses: Vec<LocationClause>,
    end_line: u32,
}

struct LocationClause {
    id: String,
    id_line: u32,
    location: Location,
    links: Vec<PendingLink>,
}

struct PendingLink {
    direction: Direction,
    target: String,
    line: u32,
}

/// Token-level parser producing an [`Outline`].
struct Parser<'src> {
    lexer: Lexer<'src>,
    /// Current token (lookahead), never a comment.
    current: Token,
}

impl<'src> Parser<'src> {
    fn new(source: &'src str) -> Self {
        let mut lexer = Lexer::new(source);
        let current = Self::significant(&mut lexer);
        Self { lexer, current }
    }

    fn parse_outline(&mut self) -> Result<Outline> {
        if self.current.kind == TokenKind::Eof {
            return Err(self.error("empty game definition"));
        }
        if !self.current.is_word("game") {
            return Err(self.unexpected("'game'"));
        }
        self.advance();

        let title = self.expect_text("game title")?;
        let author = self.expect_text("game author")?;
        let description = self.expect_text("game description")?;

        let mut clauses = Vec::new();
        loop {
            match &self.current.kind {
                TokenKind::Eof => break,
                TokenKind::Word(w) if w == "location" => clauses.push(self.parse_location()?),
                TokenKind::Word(w) if w == "game" => {
                    return Err(self.error("a definition may hold only one game header"));
                }
                _ => return Err(self.unexpected("'location'")),
            }
        }

        Ok(Outline {
            title,
            author,
            description,
            clauses,
            end_line: self.current.line(),
        })
    }

    /// Parses one location clause. The current token is the word `location`.
    fn parse_location(&mut self) -> Result<LocationClause> {
        self.advance();

        let id_line = self.current.line();
        let id = self.expect_text("location id")?;
        let name = self.expect_text("location name")?;
        let description = self.expect_text("location description")?;

        let mut location = if self.current.kind.is_number() {
            let threshold = self.expect_int("exit threshold")?;
            let message = self.expect_text("exit message")?;
            Location::with_exit(name, description, threshold, message)
        } else {
            Location::new(name, description)
        };

        while self.current.is_word("item") {
            self.advance();
            let item_name = self.expect_text("item name")?;
            let item_description = self.expect_text("item description")?;
            let value = self.expect_int("item value")?;
            location.add_item(Item::new(item_name, item_description, value))?;
        }

        let mut links = Vec::new();
        loop {
            let direction = match &self.current.kind {
                TokenKind::Eof => break,
                TokenKind::Word(w) if w == "location" || w == "game" => break,
                TokenKind::Word(w) => Direction::from_keyword(w)
                    .ok_or_else(|| self.error(&format!("unknown direction keyword '{w}'")))?,
                _ => return Err(self.unexpected("direction keyword")),
            };
            self.advance();
            let line = self.current.line();
            let target = self.expect_text("target location id")?;
            links.push(PendingLink {
                direction,
                target,
                line,
            });
        }

        log::debug!(
            "parsed location '{id}' ({} items, {} connections)",
            location.all_items().len(),
            links.len()
        );

        Ok(LocationClause {
            id,
            id_line,
            location,
            links,
        })
    }

    /// Consumes a STRING or ID: a quoted string or a bare word.
    fn expect_text(&mut self, what: &str) -> Result<String> {
        match &self.current.kind {
            TokenKind::String(s) | TokenKind::Word(s) => {
                let s = s.clone();
                self.advance();
                Ok(s)
            }
            _ => Err(self.unexpected(what)),
        }
    }

    fn expect_int(&mut self, what: &str) -> Result<i64> {
        match self.current.kind {
            TokenKind::Int(n) => {
                self.advance();
                Ok(n)
            }
            TokenKind::Float(_) => Err(self.error(&format!("{what} must be an integer"))),
            _ => Err(self.unexpected(what)),
        }
    }

    /// Advances to the next token that is not a comment.
    fn advance(&mut self) {
        self.current = Self::significant(&mut self.lexer);
    }

    fn significant(lexer: &mut Lexer<'src>) -> Token {
        loop {
            let token = lexer.next_token();
            if !token.kind.is_trivia() {
                log::trace!("token {:?} at line {}", token.kind, token.line());
                return token;
            }
        }
    }

    /// Error for a token that is not what the grammar expects here.
    fn unexpected(&self, expected: &str) -> Error {
        match &self.current.kind {
            TokenKind::Error(message) => self.error(message),
            TokenKind::Eof => self.error(&format!("expected {expected}, found end of input")),
            other => self.error(&format!("expected {expected}, found {}", other.name())),
        }
    }

    fn error(&self, message: &str) -> Error {
        Error::invalid_definition(self.current.line(), message)
    }
}

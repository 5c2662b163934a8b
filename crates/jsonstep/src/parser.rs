//! The document driver.
//!
//! [`Parser`] owns one [`ValueDispatcher`] and a consumer, and turns the
//! engine's three-valued [`Outcome`] into a `Result`. It skips whitespace
//! around root values, keeps a running byte offset across chunks, and
//! decides what may follow a complete root value.
//!
//! # Examples
//!
//! ```
//! use jsonstep::{Parser, Status, TreeBuilder};
//!
//! let mut parser = Parser::new(TreeBuilder::new());
//! assert_eq!(parser.feed(br#"{"name": "Al"#).unwrap(), Status::NeedMore);
//! assert_eq!(parser.feed(br#"ice"} "#).unwrap(), Status::Complete);
//! let value = parser.finish().unwrap().into_value().unwrap();
//! assert_eq!(value.to_string(), r#"{"name":"Alice"}"#);
//! ```
use alloc::vec::Vec;

use crate::{
    Consumer, Cursor, Event, Outcome, ParseError, ParserOptions, TreeBuilder, ValueDispatcher,
    WhitespaceScanner, value::Value,
};

/// Where the driver is relative to the current root value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    BeforeValue,
    InValue,
    AfterValue,
}

/// What a successful [`Parser::feed`] call left behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The current root value is unfinished, or none has started yet.
    NeedMore,
    /// A root value is complete; any bytes after it were whitespace.
    Complete,
}

/// Feeds chunks of a JSON document through a [`ValueDispatcher`].
///
/// A number at the very end of the input has nothing to terminate it, so the
/// driver only reports it once [`finish`](Parser::finish) declares the end
/// of input.
#[derive(Debug)]
pub struct Parser<C: Consumer> {
    consumer: C,
    options: ParserOptions,
    value: ValueDispatcher,
    whitespace: WhitespaceScanner,
    state: State,
    offset: usize,
    values: usize,
    failed: Option<ParseError>,
}

impl<C: Consumer> Parser<C> {
    /// Creates a driver with default options.
    pub fn new(consumer: C) -> Self {
        Self::with_options(consumer, ParserOptions::default())
    }

    /// Creates a driver with the given options.
    pub fn with_options(consumer: C, options: ParserOptions) -> Self {
        Self {
            consumer,
            options,
            value: ValueDispatcher::new(),
            whitespace: WhitespaceScanner::new(),
            state: State::BeforeValue,
            offset: 0,
            values: 0,
            failed: None,
        }
    }

    /// The consumer receiving events.
    pub fn consumer(&self) -> &C {
        &self.consumer
    }

    /// Mutable access to the consumer, for example to drain recorded events
    /// between chunks.
    pub fn consumer_mut(&mut self) -> &mut C {
        &mut self.consumer
    }

    /// Total bytes consumed across every chunk.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Number of root values completed so far.
    pub fn values(&self) -> usize {
        self.values
    }

    /// Feeds the next chunk.
    ///
    /// # Errors
    ///
    /// [`ParseError::Syntax`] when the document cannot continue with the
    /// bytes supplied, [`ParseError::DepthLimitExceeded`] when it nests
    /// deeper than [`max_depth`](ParserOptions::max_depth), and [`ParseError::TrailingCharacters`] when something
    /// other than whitespace follows a complete root value and
    /// [`allow_multiple_values`](ParserOptions::allow_multiple_values) is
    /// off. Once an error has been returned every later call returns it
    /// again.
    pub fn feed(&mut self, chunk: &[u8]) -> Result<Status, ParseError> {
        if let Some(err) = self.failed {
            return Err(err);
        }
        let mut input = Cursor::new(chunk).with_max_depth(self.options.max_depth);
        let result = self.drive(&mut input);
        self.offset += input.position();
        if let Err(err) = result {
            self.failed = Some(err);
        }
        result
    }

    /// Declares the end of input and returns the consumer.
    ///
    /// # Errors
    ///
    /// [`ParseError::UnexpectedEnd`] if no root value was completed or the
    /// last one is still open; an earlier error is returned again.
    pub fn finish(mut self) -> Result<C, ParseError> {
        if let Some(err) = self.failed {
            return Err(err);
        }
        match self.state {
            State::AfterValue => Ok(self.consumer),
            State::BeforeValue if self.values > 0 => Ok(self.consumer),
            State::BeforeValue => Err(ParseError::UnexpectedEnd),
            State::InValue => match self.value.finish(&mut self.consumer) {
                Outcome::Ok => {
                    self.values += 1;
                    Ok(self.consumer)
                }
                Outcome::Partial | Outcome::Error => Err(ParseError::UnexpectedEnd),
            },
        }
    }

    fn drive(&mut self, input: &mut Cursor<'_>) -> Result<Status, ParseError> {
        loop {
            match self.state {
                State::BeforeValue => {
                    if self.whitespace.parse(input) == Outcome::Partial {
                        return Ok(Status::NeedMore);
                    }
                    self.state = State::InValue;
                }
                State::InValue => match self.value.parse(input, &mut self.consumer) {
                    Outcome::Ok => {
                        self.values += 1;
                        self.state = State::AfterValue;
                    }
                    Outcome::Partial => return Ok(Status::NeedMore),
                    Outcome::Error => {
                        let offset = self.offset + input.furthest();
                        return Err(if input.depth_exceeded() {
                            ParseError::DepthLimitExceeded { offset }
                        } else {
                            ParseError::Syntax { offset }
                        });
                    }
                },
                State::AfterValue => {
                    if self.whitespace.parse(input) == Outcome::Partial {
                        return Ok(Status::Complete);
                    }
                    if !self.options.allow_multiple_values {
                        return Err(ParseError::TrailingCharacters {
                            offset: self.offset + input.position(),
                        });
                    }
                    self.value.reset();
                    self.state = State::InValue;
                }
            }
        }
    }
}

/// Parses a complete document held in memory.
///
/// # Errors
///
/// Any [`ParseError`] the driver reports.
///
/// # Examples
///
/// ```
/// let value = jsonstep::from_slice(br#"[1, "two", null]"#).unwrap();
/// assert_eq!(value.to_string(), r#"[1,"two",null]"#);
/// ```
pub fn from_slice(input: &[u8]) -> Result<Value, ParseError> {
    from_chunks([input])
}

/// Parses a document delivered as a sequence of chunks.
///
/// # Errors
///
/// Any [`ParseError`] the driver reports.
pub fn from_chunks<'a, I>(chunks: I) -> Result<Value, ParseError>
where
    I: IntoIterator<Item = &'a [u8]>,
{
    let mut parser = Parser::new(TreeBuilder::new());
    for chunk in chunks {
        parser.feed(chunk)?;
    }
    parser
        .finish()?
        .into_value()
        .ok_or(ParseError::UnexpectedEnd)
}

/// Parses a complete document and returns the events it produced.
///
/// # Errors
///
/// Any [`ParseError`] the driver reports.
pub fn events_from_slice(input: &[u8]) -> Result<Vec<Event>, ParseError> {
    let mut parser = Parser::new(Vec::new());
    parser.feed(input)?;
    parser.finish()
}

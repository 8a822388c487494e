//! A small CSS selector subset for picking auto-registered items.
//!
//! Supported: `tag`, `*`, `#id`, `.class`, `[attr]`, `[attr=value]` and
//! `[attr="value"]`, combined into compounds (`button.primary[disabled]`),
//! joined by descendant (`nav a`) and child (`.row > button`) combinators,
//! and comma-separated lists.

use crate::element::Element;
use crate::error::SelectorError;

/// A parsed selector list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    alternatives: Vec<Complex>,
}

/// Compounds joined by combinators, outermost first.
/// `combinators[i]` sits between `compounds[i]` and `compounds[i + 1]`.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Complex {
    compounds: Vec<Compound>,
    combinators: Vec<Combinator>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Combinator {
    Descendant,
    Child,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct Compound {
    universal: bool,
    tag: Option<String>,
    parts: Vec<Part>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Part {
    Id(String),
    Class(String),
    Attr { name: String, value: Option<String> },
}

impl Selector {
    pub fn parse(src: &str) -> Result<Self, SelectorError> {
        if src.trim().is_empty() {
            return Err(SelectorError::Empty);
        }

        let mut parser = Parser { src, pos: 0 };
        let mut alternatives = Vec::new();
        loop {
            parser.skip_ws();
            alternatives.push(parser.complex()?);
            // complex() stops only at a comma or the end of input
            if parser.bump() != Some(',') {
                break;
            }
        }

        Ok(Self { alternatives })
    }

    /// True if the element matches any selector in the list, with no
    /// ancestors known. Selectors with combinators never match here.
    pub fn matches(&self, element: &Element) -> bool {
        self.matches_in(element, &[])
    }

    /// True if the element matches any selector in the list.
    ///
    /// `ancestors` is the element's ancestor chain, outermost first and
    /// ending with its parent. Combinators only look at these elements.
    pub fn matches_in(&self, element: &Element, ancestors: &[&Element]) -> bool {
        self.alternatives
            .iter()
            .any(|c| matches_chain(&c.compounds, &c.combinators, element, ancestors))
    }
}

/// Match right to left: the last compound against `element`, the rest
/// against its ancestors as the combinators allow.
fn matches_chain(
    compounds: &[Compound],
    combinators: &[Combinator],
    element: &Element,
    ancestors: &[&Element],
) -> bool {
    let Some((subject, outer)) = compounds.split_last() else {
        return true;
    };
    if !subject.matches(element) {
        return false;
    }
    let Some((combinator, outer_combinators)) = combinators.split_last() else {
        return true;
    };

    match combinator {
        Combinator::Child => ancestors
            .split_last()
            .is_some_and(|(parent, above)| matches_chain(outer, outer_combinators, parent, above)),
        Combinator::Descendant => (0..ancestors.len())
            .rev()
            .any(|i| matches_chain(outer, outer_combinators, ancestors[i], &ancestors[..i])),
    }
}

impl std::str::FromStr for Selector {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Compound {
    fn is_empty(&self) -> bool {
        !self.universal && self.tag.is_none() && self.parts.is_empty()
    }

    fn matches(&self, element: &Element) -> bool {
        if let Some(tag) = &self.tag {
            if !element.tag.eq_ignore_ascii_case(tag) {
                return false;
            }
        }
        self.parts.iter().all(|part| match part {
            Part::Id(id) => element.id == *id,
            Part::Class(class) => element
                .get_attr("class")
                .is_some_and(|classes| classes.split_whitespace().any(|c| c == class.as_str())),
            Part::Attr { name, value } => match (element.get_attr(name), value) {
                (Some(_), None) => true,
                (Some(actual), Some(expected)) => actual == expected.as_str(),
                (None, _) => false,
            },
        })
    }
}

fn is_name_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '-' || ch == '_'
}

struct Parser<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    fn skip_ws(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.bump();
        }
    }

    fn name(&mut self) -> &'a str {
        let start = self.pos;
        while self.peek().is_some_and(is_name_char) {
            self.bump();
        }
        &self.src[start..self.pos]
    }

    fn required_name(&mut self, prefix: char) -> Result<&'a str, SelectorError> {
        let offset = self.pos;
        let name = self.name();
        if name.is_empty() {
            return Err(SelectorError::MissingName { prefix, offset });
        }
        Ok(name)
    }

    fn complex(&mut self) -> Result<Complex, SelectorError> {
        let start = self.pos;
        let first = self.compound()?;
        if first.is_empty() {
            return match self.peek() {
                Some(',') | None => Err(SelectorError::EmptyEntry(start)),
                Some(ch) => Err(SelectorError::UnexpectedChar { ch, offset: start }),
            };
        }

        let mut complex = Complex {
            compounds: vec![first],
            combinators: Vec::new(),
        };
        loop {
            let before = self.pos;
            self.skip_ws();
            let at = self.pos;
            let combinator = match self.peek() {
                None | Some(',') => break,
                Some('>') => {
                    self.bump();
                    self.skip_ws();
                    Combinator::Child
                }
                Some(_) if at > before => Combinator::Descendant,
                Some(ch) => return Err(SelectorError::UnexpectedChar { ch, offset: at }),
            };

            let offset = self.pos;
            let compound = self.compound()?;
            if compound.is_empty() {
                return match self.peek() {
                    Some(',') | None => Err(SelectorError::DanglingCombinator(at)),
                    Some(ch) => Err(SelectorError::UnexpectedChar { ch, offset }),
                };
            }
            complex.combinators.push(combinator);
            complex.compounds.push(compound);
        }

        Ok(complex)
    }

    fn compound(&mut self) -> Result<Compound, SelectorError> {
        let mut compound = Compound::default();

        match self.peek() {
            Some('*') => {
                self.bump();
                compound.universal = true;
            }
            Some(ch) if is_name_char(ch) => {
                compound.tag = Some(self.name().to_ascii_lowercase());
            }
            _ => {}
        }

        loop {
            let open = self.pos;
            match self.peek() {
                Some('#') => {
                    self.bump();
                    let id = self.required_name('#')?;
                    compound.parts.push(Part::Id(id.to_string()));
                }
                Some('.') => {
                    self.bump();
                    let class = self.required_name('.')?;
                    compound.parts.push(Part::Class(class.to_string()));
                }
                Some('[') => {
                    self.bump();
                    compound.parts.push(self.attribute(open)?);
                }
                _ => break,
            }
        }

        Ok(compound)
    }

    /// Parse the rest of an attribute selector; `open` is the offset of `[`.
    fn attribute(&mut self, open: usize) -> Result<Part, SelectorError> {
        self.skip_ws();
        if self.peek().is_none() {
            return Err(SelectorError::UnterminatedAttribute(open));
        }
        let name = self.required_name('[')?.to_ascii_lowercase();
        self.skip_ws();

        let offset = self.pos;
        let value = match self.bump() {
            Some(']') => return Ok(Part::Attr { name, value: None }),
            Some('=') => {
                self.skip_ws();
                self.value(open)?
            }
            Some(ch) => return Err(SelectorError::UnexpectedChar { ch, offset }),
            None => return Err(SelectorError::UnterminatedAttribute(open)),
        };

        self.skip_ws();
        let offset = self.pos;
        match self.bump() {
            Some(']') => Ok(Part::Attr {
                name,
                value: Some(value),
            }),
            Some(ch) => Err(SelectorError::UnexpectedChar { ch, offset }),
            None => Err(SelectorError::UnterminatedAttribute(open)),
        }
    }

    fn value(&mut self, open: usize) -> Result<String, SelectorError> {
        match self.peek() {
            Some(quote @ ('"' | '\'')) => {
                self.bump();
                let start = self.pos;
                loop {
                    match self.bump() {
                        Some(ch) if ch == quote => {
                            return Ok(self.src[start..self.pos - ch.len_utf8()].to_string());
                        }
                        Some(_) => {}
                        None => return Err(SelectorError::UnterminatedAttribute(open)),
                    }
                }
            }
            None => Err(SelectorError::UnterminatedAttribute(open)),
            Some(_) => Ok(self.required_name('=')?.to_string()),
        }
    }
}

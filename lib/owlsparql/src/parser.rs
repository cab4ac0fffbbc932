use crate::error::QuerySyntaxError;
use crate::query::{
    OptionalBlock, PatternElement, PatternTerm, SelectClause, SelectQuery, TriplePattern,
    WhereClause,
};
use crate::term::Variable;
use owlmodel::vocab;
use std::fmt;

/// One lexical unit of a `SELECT` query.
///
/// `Iri` covers every constant spelling: bracketed `<...>` forms keep their
/// brackets until prefix expansion, bare words and `prefix:name` forms are
/// stored as written.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Select,
    Where,
    Optional,
    Star,
    Dot,
    Semicolon,
    OpenBrace,
    CloseBrace,
    Variable(String),
    Iri(String),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Select => f.write_str("SELECT"),
            Self::Where => f.write_str("WHERE"),
            Self::Optional => f.write_str("OPTIONAL"),
            Self::Star => f.write_str("*"),
            Self::Dot => f.write_str("."),
            Self::Semicolon => f.write_str(";"),
            Self::OpenBrace => f.write_str("{"),
            Self::CloseBrace => f.write_str("}"),
            Self::Variable(name) => write!(f, "?{name}"),
            Self::Iri(value) => f.write_str(value),
        }
    }
}

fn tokenize(query: &str) -> Result<Vec<Token>, QuerySyntaxError> {
    let mut tokens = Vec::new();
    let mut rest = query;
    loop {
        rest = rest.trim_start();
        let Some(first) = rest.chars().next() else {
            return Ok(tokens);
        };
        match first {
            '{' => {
                tokens.push(Token::OpenBrace);
                rest = &rest[1..];
            }
            '}' => {
                tokens.push(Token::CloseBrace);
                rest = &rest[1..];
            }
            // A full IRI is one token; dots inside it are not separators.
            '<' => {
                let Some(end) = rest.find('>') else {
                    return Err(QuerySyntaxError::new("unclosed <...> IRI"));
                };
                tokens.push(Token::Iri(rest[..=end].to_owned()));
                rest = &rest[end + 1..];
            }
            _ => {
                let end = rest
                    .find(|c: char| c.is_whitespace() || matches!(c, '{' | '}' | '<'))
                    .unwrap_or(rest.len());
                let (word, after) = rest.split_at(end);
                rest = after;
                push_word(word, &mut tokens)?;
            }
        }
    }
}

/// Pushes a whitespace-delimited word, splitting off trailing `.` and `;`
/// separators so `rdf:type.` reads as `rdf:type` followed by `.`.
fn push_word(word: &str, tokens: &mut Vec<Token>) -> Result<(), QuerySyntaxError> {
    let mut word = word;
    let mut separators = Vec::new();
    while word.len() > 1 {
        if let Some(stripped) = word.strip_suffix('.') {
            word = stripped;
            separators.push(Token::Dot);
        } else if let Some(stripped) = word.strip_suffix(';') {
            word = stripped;
            separators.push(Token::Semicolon);
        } else {
            break;
        }
    }
    tokens.push(classify(word)?);
    tokens.extend(separators.into_iter().rev());
    Ok(())
}

fn classify(word: &str) -> Result<Token, QuerySyntaxError> {
    if word.eq_ignore_ascii_case("select") {
        return Ok(Token::Select);
    }
    if word.eq_ignore_ascii_case("where") {
        return Ok(Token::Where);
    }
    if word.eq_ignore_ascii_case("optional") {
        return Ok(Token::Optional);
    }
    match word {
        "*" => return Ok(Token::Star),
        "." => return Ok(Token::Dot),
        ";" => return Ok(Token::Semicolon),
        _ => {}
    }
    if let Some(name) = word.strip_prefix('?') {
        if name.is_empty() {
            return Err(QuerySyntaxError::new("a variable needs a name after the ?"));
        }
        return Ok(Token::Variable(name.to_owned()));
    }
    if word.starts_with('"') {
        return Err(QuerySyntaxError::new(
            "string literals are not supported in triple patterns",
        ));
    }
    Ok(Token::Iri(word.to_owned()))
}

fn unexpected(description: &str, found: Option<&Token>) -> QuerySyntaxError {
    match found {
        Some(token) => QuerySyntaxError::new(format!("expected {description}, found \"{token}\"")),
        None => QuerySyntaxError::new(format!("expected {description}, found the end of the query")),
    }
}

pub(crate) fn parse_select(query: &str) -> Result<SelectQuery, QuerySyntaxError> {
    let tokens = tokenize(query)?;
    let mut parser = Parser {
        tokens: &tokens,
        position: 0,
    };
    let parsed = parser.parse_query()?;
    if let Some(token) = parser.peek() {
        return Err(QuerySyntaxError::new(format!(
            "unexpected content after the WHERE block: \"{token}\""
        )));
    }
    Ok(parsed)
}

struct Parser<'a> {
    tokens: &'a [Token],
    position: usize,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.position)
    }

    fn advance(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.position)?;
        self.position += 1;
        Some(token)
    }

    fn expect(&mut self, expected: &Token, description: &str) -> Result<(), QuerySyntaxError> {
        match self.advance() {
            Some(token) if token == expected => Ok(()),
            found => Err(unexpected(description, found)),
        }
    }

    fn parse_query(&mut self) -> Result<SelectQuery, QuerySyntaxError> {
        self.expect(&Token::Select, "the SELECT keyword")?;
        let projection = self.parse_projection()?;
        self.expect(&Token::Where, "the WHERE keyword")?;
        self.expect(&Token::OpenBrace, "a { opening the WHERE block")?;
        let elements = self.parse_group()?;
        self.expect(&Token::CloseBrace, "a } closing the WHERE block")?;
        Ok(SelectQuery {
            projection,
            where_clause: WhereClause { elements },
        })
    }

    fn parse_projection(&mut self) -> Result<SelectClause, QuerySyntaxError> {
        if self.peek() == Some(&Token::Star) {
            self.position += 1;
            return Ok(SelectClause::All);
        }
        let mut variables = Vec::new();
        while let Some(Token::Variable(name)) = self.peek() {
            variables.push(Variable::new(name.clone()));
            self.position += 1;
        }
        if variables.is_empty() {
            return Err(QuerySyntaxError::new(
                "the SELECT clause needs at least one variable or *",
            ));
        }
        Ok(SelectClause::Variables(variables))
    }

    fn parse_group(&mut self) -> Result<Vec<PatternElement>, QuerySyntaxError> {
        let mut elements = Vec::new();
        loop {
            match self.peek() {
                None | Some(Token::CloseBrace) => break,
                Some(Token::Optional) => {
                    self.position += 1;
                    elements.push(PatternElement::Optional(self.parse_optional_block()?));
                }
                _ => elements.push(PatternElement::Triple(self.parse_pattern()?)),
            }
            self.consume_separator();
        }
        if elements.is_empty() {
            return Err(QuerySyntaxError::new(
                "the WHERE block needs at least one triple pattern",
            ));
        }
        Ok(elements)
    }

    fn parse_optional_block(&mut self) -> Result<OptionalBlock, QuerySyntaxError> {
        self.expect(&Token::OpenBrace, "a { opening the OPTIONAL block")?;
        let mut patterns = Vec::new();
        loop {
            match self.peek() {
                None | Some(Token::CloseBrace) => break,
                Some(Token::Optional) => {
                    return Err(QuerySyntaxError::new("OPTIONAL blocks cannot be nested"));
                }
                _ => patterns.push(self.parse_pattern()?),
            }
            self.consume_separator();
        }
        self.expect(&Token::CloseBrace, "a } closing the OPTIONAL block")?;
        if patterns.is_empty() {
            return Err(QuerySyntaxError::new(
                "an OPTIONAL block needs at least one triple pattern",
            ));
        }
        Ok(OptionalBlock { patterns })
    }

    fn parse_pattern(&mut self) -> Result<TriplePattern, QuerySyntaxError> {
        let subject = self.parse_term("a triple subject")?;
        let predicate = self.parse_term("a triple predicate")?;
        let object = self.parse_term("a triple object")?;
        Ok(TriplePattern {
            subject,
            predicate,
            object,
        })
    }

    /// IRI constants are prefix-expanded here, so the AST only carries full
    /// IRIs and variables.
    fn parse_term(&mut self, description: &str) -> Result<PatternTerm, QuerySyntaxError> {
        match self.advance() {
            Some(Token::Variable(name)) => Ok(PatternTerm::Variable(Variable::new(name.clone()))),
            Some(Token::Iri(value)) => Ok(PatternTerm::Iri(vocab::expand(value).into_owned())),
            found => Err(unexpected(description, found)),
        }
    }

    fn consume_separator(&mut self) {
        if matches!(self.peek(), Some(Token::Dot | Token::Semicolon)) {
            self.position += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn error_of(query: &str) -> String {
        parse_select(query).unwrap_err().to_string()
    }

    #[test]
    fn keywords_are_case_insensitive() {
        let parsed = parse_select("select ?x where { ?x rdf:type owl:Class }").unwrap();
        assert_eq!(
            parsed.projection,
            SelectClause::Variables(vec![Variable::new("x")])
        );
        assert_eq!(parsed.where_clause.elements.len(), 1);
    }

    #[test]
    fn trailing_separators_split_off_words() {
        let tokens = tokenize("rdf:type. ?x;").unwrap();
        assert_eq!(
            tokens,
            [
                Token::Iri("rdf:type".to_owned()),
                Token::Dot,
                Token::Variable("x".to_owned()),
                Token::Semicolon,
            ]
        );
    }

    #[test]
    fn dots_inside_bracketed_iris_are_kept() {
        let tokens = tokenize("<http://example.org/v1.0#Class>.").unwrap();
        assert_eq!(
            tokens,
            [
                Token::Iri("<http://example.org/v1.0#Class>".to_owned()),
                Token::Dot,
            ]
        );
    }

    #[test]
    fn constants_are_expanded_in_the_ast() {
        let parsed = parse_select("SELECT ?s WHERE { ?s rdf:type <http://example.org/o#A> }")
            .unwrap();
        let PatternElement::Triple(pattern) = &parsed.where_clause.elements[0] else {
            panic!("expected a plain triple pattern");
        };
        assert_eq!(
            pattern.predicate,
            PatternTerm::Iri("http://www.w3.org/1999/02/22-rdf-syntax-ns#type".to_owned())
        );
        assert_eq!(
            pattern.object,
            PatternTerm::Iri("http://example.org/o#A".to_owned())
        );
    }

    #[test]
    fn unclosed_iris_are_rejected() {
        assert_eq!(
            error_of("SELECT ?s WHERE { ?s ?p <http://example.org/o }"),
            "invalid SPARQL query: unclosed <...> IRI"
        );
    }

    #[test]
    fn variables_need_a_name() {
        assert_eq!(
            error_of("SELECT ? WHERE { ?s ?p ?o }"),
            "invalid SPARQL query: a variable needs a name after the ?"
        );
    }

    #[test]
    fn string_literals_are_rejected() {
        assert_eq!(
            error_of("SELECT ?s WHERE { ?s rdfs:label \"Person\" }"),
            "invalid SPARQL query: string literals are not supported in triple patterns"
        );
    }

    #[test]
    fn the_select_keyword_is_required() {
        assert_eq!(
            error_of("WHERE { ?s ?p ?o }"),
            "invalid SPARQL query: expected the SELECT keyword, found \"WHERE\""
        );
        assert_eq!(
            error_of(""),
            "invalid SPARQL query: expected the SELECT keyword, found the end of the query"
        );
    }

    #[test]
    fn the_where_block_is_required() {
        assert_eq!(
            error_of("SELECT ?s"),
            "invalid SPARQL query: expected the WHERE keyword, found the end of the query"
        );
        assert_eq!(
            error_of("SELECT ?s WHERE ?s ?p ?o"),
            "invalid SPARQL query: expected a { opening the WHERE block, found \"?s\""
        );
    }

    #[test]
    fn unclosed_where_blocks_are_rejected() {
        assert_eq!(
            error_of("SELECT ?s WHERE { ?s ?p ?o"),
            "invalid SPARQL query: expected a } closing the WHERE block, found the end of the query"
        );
    }

    #[test]
    fn incomplete_triples_are_rejected() {
        assert_eq!(
            error_of("SELECT ?s WHERE { ?s ?p }"),
            "invalid SPARQL query: expected a triple object, found \"}\""
        );
    }

    #[test]
    fn empty_projections_are_rejected() {
        assert_eq!(
            error_of("SELECT WHERE { ?s ?p ?o }"),
            "invalid SPARQL query: the SELECT clause needs at least one variable or *"
        );
    }

    #[test]
    fn empty_where_blocks_are_rejected() {
        assert_eq!(
            error_of("SELECT * WHERE { }"),
            "invalid SPARQL query: the WHERE block needs at least one triple pattern"
        );
    }

    #[test]
    fn empty_optional_blocks_are_rejected() {
        assert_eq!(
            error_of("SELECT * WHERE { ?s ?p ?o OPTIONAL { } }"),
            "invalid SPARQL query: an OPTIONAL block needs at least one triple pattern"
        );
    }

    #[test]
    fn nested_optional_blocks_are_rejected() {
        assert_eq!(
            error_of("SELECT * WHERE { OPTIONAL { OPTIONAL { ?s ?p ?o } } }"),
            "invalid SPARQL query: OPTIONAL blocks cannot be nested"
        );
    }

    #[test]
    fn trailing_content_is_rejected() {
        assert_eq!(
            error_of("SELECT ?s WHERE { ?s ?p ?o } ORDER"),
            "invalid SPARQL query: unexpected content after the WHERE block: \"ORDER\""
        );
    }
}

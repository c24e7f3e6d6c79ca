// https://www.w3.org/TR/did-core/#did-syntax
use nom::{
    branch::alt,
    bytes::complete::{tag, take_while1},
    character::complete::{alphanumeric1, char, satisfy},
    combinator::{all_consuming, recognize},
    multi::{many0, many1},
    sequence::{delimited, terminated, tuple},
    AsChar, IResult,
};

use crate::{Did, DidRange, ParseError};

const DID_PREFIX: &str = "did";

/// Ranges of the method name and the method-specific id within the parsed input.
pub(crate) type DidRanges = (DidRange, DidRange);

fn is_lowercase_alphanumeric(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_dec_digit()
}

// pct-encoded = "%" HEXDIG HEXDIG
pub(crate) fn pct_encoded(input: &str) -> IResult<&str, &str> {
    recognize(tuple((
        tag("%"),
        satisfy(|c| c.is_hex_digit()),
        satisfy(|c| c.is_hex_digit()),
    )))(input)
}

// idchar = ALPHA / DIGIT / "." / "-" / "_" / pct-encoded
fn idchar(input: &str) -> IResult<&str, &str> {
    alt((alphanumeric1, tag("."), tag("-"), tag("_"), pct_encoded))(input)
}

// method-name = 1*method-char
// method-char = %x61-7A / DIGIT
fn method_name(input: &str) -> IResult<&str, &str> {
    delimited(char(':'), take_while1(is_lowercase_alphanumeric), char(':'))(input)
}

// method-specific-id = *( *idchar ":" ) 1*idchar
fn method_specific_id(input: &str) -> IResult<&str, &str> {
    log::trace!("did::parsing::method_specific_id >> input: {:?}", input);
    let ret = recognize(tuple((
        many0(terminated(many0(idchar), char(':'))),
        many1(idchar),
    )))(input);
    log::trace!("did::parsing::method_specific_id >> ret: {:?}", ret);
    ret
}

// did = "did:" method-name ":" method-specific-id
fn qualified_did(input: &str) -> IResult<&str, (&str, &str)> {
    let (remaining, (_, method, id)) =
        tuple((tag(DID_PREFIX), method_name, method_specific_id))(input)?;
    Ok((remaining, (method, id)))
}

fn to_did_ranges((method, id): (&str, &str)) -> DidRanges {
    let method_start = DID_PREFIX.len() + 1;
    let method_end = method_start + method.len();
    let id_start = method_end + 1;
    let id_end = id_start + id.len();
    (method_start..method_end, id_start..id_end)
}

/// Parses the DID at the start of `input`, leaving any DID URL components unconsumed.
pub(crate) fn parse_did_ranges(input: &str) -> IResult<&str, DidRanges> {
    let (remaining, parts) = qualified_did(input)?;
    Ok((remaining, to_did_ranges(parts)))
}

pub(crate) fn parse_did(did: String) -> Result<Did, ParseError> {
    if did.is_empty() {
        return Err(ParseError::InvalidInput("Empty input"));
    }

    let (_, (method, id)) = all_consuming(parse_did_ranges)(&did)?;

    Ok(Did { did, method, id })
}

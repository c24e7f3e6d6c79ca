use nom::{
    branch::alt,
    bytes::complete::{tag, take_while, take_while1},
    character::complete::{char, satisfy},
    combinator::{all_consuming, cut, opt, recognize},
    multi::many0,
    sequence::{preceded, separated_pair},
    IResult, Offset,
};

use crate::{
    did::parsing::{parse_did_ranges, pct_encoded},
    DidRange, DidUrl, ParseError,
};

type KeyValue<'a> = (&'a str, &'a str);

struct UrlPart<'a> {
    params: Vec<KeyValue<'a>>,
    path: &'a str,
    query: Option<&'a str>,
    fragment: Option<&'a str>,
}

// unreserved  = ALPHA / DIGIT / "-" / "." / "_" / "~"
fn is_unreserved(c: char) -> bool {
    c.is_ascii_alphabetic() || c.is_ascii_digit() || "-._~".contains(c)
}

// sub-delims = "!" / "$" / "&" / "'" / "(" / ")" / "*" / "+" / "," / ";" / "="
fn is_sub_delims(c: char) -> bool {
    "!$&'()*+,;=".contains(c)
}

// pchar = unreserved / pct-encoded / sub-delims / ":" / "@"
fn pchar(input: &str) -> IResult<&str, &str> {
    alt((
        recognize(satisfy(is_unreserved)),
        pct_encoded,
        recognize(satisfy(is_sub_delims)),
        tag(":"),
        tag("@"),
    ))(input)
}

// Query and fragment characters, minus the delimiters that end the component being read.
fn is_component_char(c: char, delimiters: &str) -> bool {
    (is_unreserved(c) || is_sub_delims(c) || ":@/?%".contains(c)) && !delimiters.contains(c)
}

// segment = *pchar
fn segment(input: &str) -> IResult<&str, &str> {
    recognize(many0(pchar))(input)
}

// path-abempty = *( "/" segment )
fn path_abempty(input: &str) -> IResult<&str, &str> {
    recognize(many0(preceded(tag("/"), segment)))(input)
}

// param = ";" param-name "=" param-value
fn param_key_value_pair(input: &str) -> IResult<&str, KeyValue<'_>> {
    fn is_param_char(c: char) -> bool {
        is_unreserved(c) || ":@%".contains(c)
    }

    preceded(
        char(';'),
        cut(separated_pair(
            take_while1(is_param_char),
            char('='),
            take_while(is_param_char),
        )),
    )(input)
}

// query = *( pchar / "/" / "?" )
fn query_parser(input: &str) -> IResult<&str, &str> {
    take_while(|c| is_component_char(c, "#"))(input)
}

// Pairs are separated by "&" or "?". A key without "=" gets an empty value.
fn query_pairs(query: &str) -> Vec<KeyValue<'_>> {
    query
        .split(['&', '?'])
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            pair.split_once('=')
                .unwrap_or((pair, &pair[pair.len()..]))
        })
        .collect()
}

// fragment = *( pchar / "/" / "?" )
fn fragment_parser(input: &str) -> IResult<&str, &str> {
    take_while(|c| is_component_char(c, "#"))(input)
}

// did-url-remaining = *( ";" param ) path-abempty [ "?" query ] [ "#" fragment ]
fn parse_url_part(input: &str) -> IResult<&str, UrlPart<'_>> {
    let (input, params) = many0(param_key_value_pair)(input)?;
    let (input, path) = path_abempty(input)?;
    let (input, query) = opt(preceded(char('?'), query_parser))(input)?;
    let (input, fragment) = opt(preceded(char('#'), fragment_parser))(input)?;
    Ok((
        input,
        UrlPart {
            params,
            path,
            query,
            fragment,
        },
    ))
}

fn to_range(base: &str, part: &str) -> DidRange {
    let start = base.offset(part);
    start..start + part.len()
}

fn to_range_pairs(base: &str, pairs: Vec<KeyValue<'_>>) -> Vec<(DidRange, DidRange)> {
    pairs
        .into_iter()
        .map(|(key, value)| (to_range(base, key), to_range(base, value)))
        .collect()
}

// did-url = did *( ";" param ) path-abempty [ "?" query ] [ "#" fragment ]
pub(crate) fn parse_did_url(did_url: String) -> Result<DidUrl, ParseError> {
    if did_url.is_empty() {
        return Err(ParseError::InvalidInput("Empty input"));
    }

    let (remaining, (method, id)) = parse_did_ranges(&did_url)?;
    let (_, url_part) = all_consuming(parse_url_part)(remaining)?;
    log::trace!(
        "did_url::parse_did_url >> params: {:?}, path: {:?}, query: {:?}, fragment: {:?}",
        url_part.params,
        url_part.path,
        url_part.query,
        url_part.fragment
    );

    let params = to_range_pairs(&did_url, url_part.params);
    let path = (!url_part.path.is_empty()).then(|| to_range(&did_url, url_part.path));
    let queries = to_range_pairs(
        &did_url,
        url_part.query.map(query_pairs).unwrap_or_default(),
    );
    let fragment = url_part.fragment.map(|fragment| to_range(&did_url, fragment));

    Ok(DidUrl {
        did: 0..id.end,
        method,
        id,
        params,
        path,
        queries,
        fragment,
        did_url,
    })
}

use did_parser_nom::{Did, DidUrl};

fn main() {
    // parse a string into DID
    let did = Did::parse("did:web:w3c-ccg.github.io".into()).unwrap();
    println!("{:?}", did.did());
    println!("{:?}", did.method());
    println!("{:?}", did.id());

    // parse a DID URL selecting a service
    let did_url = DidUrl::parse("did:web:w3c-ccg.github.io?service=agent#key-1".into()).unwrap();
    println!("{:?}", did_url.did());
    println!("{:?}", did_url.service());
    println!("{:?}", did_url.fragment());
}

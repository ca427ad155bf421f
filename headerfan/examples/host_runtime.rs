use headerfan::prelude::*;

// Mimics handing a response to a host runtime that only keeps one value per header key.
fn main() -> Result<()> {
    env_logger::init();

    let mut headers = HeaderMap::new();
    headers.append("Content-Type", "text/html");
    headers.append("Set-Cookie", "first=tj; Path=/");
    headers.append("Set-Cookie", "last=holowaychuk; Path=/");
    headers.append("Set-Cookie", "pet=tobi; Path=/");

    println!("before: {:?}", headers.flatten());
    fix_multiple_set_cookie(&mut headers);
    println!("after:  {:?}", headers.flatten());

    let ttl = parse_duration("1.5d")?;
    println!("cookie ttl: {}s", ttl.as_secs());
    println!("certificate: {:?}", cert_domain_names("v1.api.example.com"));
    Ok(())
}

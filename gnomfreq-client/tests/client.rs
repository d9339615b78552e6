use std::io::{BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread::{self, JoinHandle};

use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::Value;

use gnomfreq_client::GnomadClient;
use gnomfreq_core::{
    DataCategory, FetchFailure, PopulationRecord, ReferenceBuild, VariantSource, build_query,
};

struct CapturedRequest {
    head: String,
    body: Value,
}

fn read_request(stream: &TcpStream) -> CapturedRequest {
    let mut reader = BufReader::new(stream);
    let mut head = String::new();
    let mut content_length = 0;
    loop {
        let mut line = String::new();
        reader.read_line(&mut line).unwrap();
        if line == "\r\n" || line.is_empty() {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            if name.eq_ignore_ascii_case("content-length") {
                content_length = value.trim().parse().unwrap();
            }
        }
        head.push_str(&line);
    }
    let mut body = vec![0; content_length];
    reader.read_exact(&mut body).unwrap();
    CapturedRequest {
        head: head.to_lowercase(),
        body: serde_json::from_slice(&body).unwrap(),
    }
}

/// Answer exactly one request with a canned response.
fn serve_once(status_line: &'static str, body: &'static str) -> (String, JoinHandle<CapturedRequest>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let request = read_request(&stream);
        let response = format!(
            "{status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(response.as_bytes()).unwrap();
        stream.flush().unwrap();
        request
    });
    (format!("http://{addr}/api"), handle)
}

fn client_for(api: String) -> GnomadClient {
    GnomadClient::builder()
        .with_api(api)
        .without_proxy()
        .finish()
        .unwrap()
}

#[rstest]
fn test_fetch_posts_graphql_payload() {
    let (api, server) = serve_once(
        "HTTP/1.1 200 OK",
        r#"{"data":{"variant":{"variantId":"1-55516888-G-GA","exome":{"populations":[{"id":"NFE","ac":4,"an":12,"homozygote_count":0,"hemizygote_count":0}],"af":0.33,"ac":4,"an":12},"genome":null}}}"#,
    );
    let client = client_for(api);
    let payload = build_query("1-55516888-G-GA", DataCategory::Exome, ReferenceBuild::GnomadR2_1);

    let response = client.fetch(&payload).unwrap();
    let request = server.join().unwrap();

    assert!(request.head.starts_with("post /api "));
    assert!(request.head.contains("content-type: application/json"));
    assert_eq!(request.body, serde_json::to_value(&payload).unwrap());
    assert_eq!(
        response.section(DataCategory::Exome).unwrap().populations(),
        &[PopulationRecord {
            id: "NFE".to_string(),
            ac: Some(4),
            an: Some(12),
            homozygote_count: Some(0),
            hemizygote_count: Some(0),
        }]
    );
}

#[rstest]
fn test_fetch_surfaces_api_errors() {
    let (api, server) = serve_once(
        "HTTP/1.1 200 OK",
        r#"{"errors":[{"message":"Variant not found"}],"data":{"variant":null}}"#,
    );
    let client = client_for(api);
    let payload = build_query("rs0", DataCategory::Genome, ReferenceBuild::GnomadR3_1);

    let result = client.fetch(&payload);
    server.join().unwrap();

    assert_eq!(
        result.unwrap_err(),
        FetchFailure::Api(vec!["Variant not found".to_string()])
    );
}

#[rstest]
fn test_fetch_unreachable_endpoint() {
    // bind then drop to get a port nothing listens on
    let port = TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let client = client_for(format!("http://127.0.0.1:{port}/api"));
    let payload = build_query("rs0", DataCategory::Exome, ReferenceBuild::GnomadR2_1);

    assert!(matches!(client.fetch(&payload), Err(FetchFailure::Transport(_))));
}

use assert_cmd::Command;
use predicates::prelude::*;
use std::{
    io::{Read, Write},
    net::TcpListener,
    thread,
};

const TWO_SUM: &str = r#"{"data":{"question":{"title":"Two Sum","difficulty":"Easy",
    "content":"<p>Find two numbers.</p>",
    "topicTags":[{"name":"Array","slug":"array"},{"name":"Hash Table","slug":"hash-table"}],
    "codeSnippets":[{"lang":"Python3","langSlug":"python3","code":"class Solution:\n    pass"}]}}}"#;

fn response(extra_headers: &str, body: &str) -> String {
    format!(
        "HTTP/1.1 200 OK\r\n{extra_headers}Content-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    )
}

/// Answer one connection per canned response and return the server root.
fn serve(responses: Vec<String>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    thread::spawn(move || {
        for res in responses {
            let (mut stream, _) = listener.accept().unwrap();
            let mut buf = Vec::new();
            let mut chunk = [0u8; 4096];
            loop {
                let n = stream.read(&mut chunk).unwrap();
                if n == 0 {
                    break;
                }
                buf.extend_from_slice(&chunk[..n]);
                if let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                    let head = String::from_utf8_lossy(&buf[..end]).to_lowercase();
                    let len = head
                        .lines()
                        .find_map(|line| line.strip_prefix("content-length:"))
                        .and_then(|v| v.trim().parse::<usize>().ok())
                        .unwrap_or(0);
                    if buf.len() >= end + 4 + len {
                        break;
                    }
                }
            }
            stream.write_all(res.as_bytes()).unwrap();
        }
    });
    format!("http://{addr}")
}

#[test]
fn missing_url_should_print_usage() {
    Command::cargo_bin("lc-fetch")
        .unwrap()
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn non_problem_url_should_fail() {
    Command::cargo_bin("lc-fetch")
        .unwrap()
        .arg("https://example.com/not-a-problem")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "Could not parse problem slug from URL.",
        ));
}

#[test]
fn help_should_succeed() {
    Command::cargo_bin("lc-fetch")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Problem URL"));
}

#[test]
fn question_should_be_printed() {
    let base_url = serve(vec![
        response("Set-Cookie: csrftoken=abc123; Path=/\r\n", ""),
        response("", TWO_SUM),
    ]);

    Command::cargo_bin("lc-fetch")
        .unwrap()
        .args(["--base-url", &base_url, "https://leetcode.com/problems/two-sum/"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "# Two Sum (Easy)\nTags: Array, Hash Table\n\nFind two numbers.\n",
        ))
        .stdout(predicate::str::ends_with(
            "\n--- Python3 snippet ---\nclass Solution:\n    pass\n",
        ));
}

#[test]
fn missing_question_should_fail_without_output() {
    let base_url = serve(vec![response("", ""), response("", r#"{"data":{}}"#)]);

    Command::cargo_bin("lc-fetch")
        .unwrap()
        .args(["--base-url", &base_url, "https://leetcode.com/problems/two-sum/"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Unexpected response."));
}

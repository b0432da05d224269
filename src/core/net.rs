// src/core/net.rs

// HTTP/1.0 GET over TCP (std-only)

use std::{io::{Read, Write}, net::TcpStream, time::Duration};

/// Perform a plain HTTP GET and return the response body.
///
/// * `host` – hostname (no protocol, no port)
/// * `port` – usually 80
/// * `path` – path + query string starting with `/`
///
/// HTTP/1.0 with `Connection: close`, so the server ends the stream and
/// no chunked-transfer handling is needed. Any status outside 2xx is an
/// error carrying the status line.
pub fn http_get(host: &str, port: u16, path: &str) -> Result<String, Box<dyn std::error::Error>> {
    let mut s = TcpStream::connect((host, port))?;
    s.set_read_timeout(Some(Duration::from_secs(15)))?;
    s.set_write_timeout(Some(Duration::from_secs(15)))?;

    let req = format!(
        "GET {} HTTP/1.0\r\nHost: {}\r\nUser-Agent: lit_sheet/0.2\r\nConnection: close\r\n\r\n",
        path, host
    );
    s.write_all(req.as_bytes())?;
    s.flush()?;

    let mut buf = Vec::new();
    s.read_to_end(&mut buf)?;
    let resp = String::from_utf8_lossy(&buf);

    let status = resp.split("\r\n").next().unwrap_or("");
    if !status_is_2xx(status) {
        return Err(format!("HTTP error: {} {}{}", status, host, path).into());
    }
    let body_idx = resp.find("\r\n\r\n").ok_or("Malformed HTTP response")? + 4;
    Ok(resp[body_idx..].to_string())
}

/// "HTTP/1.0 200 OK" → true; anything without a 2xx code → false.
fn status_is_2xx(status_line: &str) -> bool {
    status_line
        .split_whitespace()
        .nth(1)
        .and_then(|code| code.parse::<u16>().ok())
        .is_some_and(|code| (200..300).contains(&code))
}

#[cfg(test)]
mod tests {
    use super::status_is_2xx;

    #[test]
    fn status_line_parsing() {
        assert!(status_is_2xx("HTTP/1.0 200 OK"));
        assert!(status_is_2xx("HTTP/1.1 204 No Content"));
        assert!(!status_is_2xx("HTTP/1.0 500 Internal Server Error"));
        assert!(!status_is_2xx("HTTP/1.0 301 Moved Permanently"));
        assert!(!status_is_2xx(""));
        assert!(!status_is_2xx("garbage"));
    }
}

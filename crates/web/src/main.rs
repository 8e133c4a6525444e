use cactpot_core::{solve, Analysis, PayoutTable};
use cactpot_data::default_payouts;
use serde::{Deserialize, Serialize};
use std::io::{Cursor, Read};
use tiny_http::{Header, Method, Response, Server, StatusCode};

fn main() {
    let server = Server::http("0.0.0.0:7878").expect("start server");
    println!("Cactpot solver API on http://localhost:7878");
    for request in server.incoming_requests() {
        if let Err(err) = handle_request(request) {
            eprintln!("request error: {err}");
        }
    }
}

#[derive(Deserialize)]
struct SolveRequest {
    board: Vec<u8>,
    /// Defaults to the standard table when the client sends none.
    #[serde(default)]
    payouts: Option<PayoutTable>,
}

#[derive(Serialize)]
struct SolveResponse {
    ok: bool,
    error: Option<String>,
    analysis: Option<Analysis>,
}

impl SolveResponse {
    fn success(analysis: Analysis) -> Self {
        Self {
            ok: true,
            error: None,
            analysis: Some(analysis),
        }
    }

    fn failure(error: String) -> Self {
        Self {
            ok: false,
            error: Some(error),
            analysis: None,
        }
    }
}

fn handle_request(mut request: tiny_http::Request) -> Result<(), Box<dyn std::error::Error>> {
    let url = request.url().to_string();
    match (request.method(), url.as_str()) {
        (&Method::Get, "/api/payouts") => {
            let response = json_response(&default_payouts())?;
            request.respond(response)?;
        }
        (&Method::Post, "/api/solve") => {
            let mut body = String::new();
            request.as_reader().read_to_string(&mut body)?;
            let response = json_response(&build_solve_response(&body))?;
            request.respond(response)?;
        }
        _ => {
            request.respond(Response::empty(StatusCode(404)))?;
        }
    }
    Ok(())
}

fn build_solve_response(body: &str) -> SolveResponse {
    let parsed: SolveRequest = match serde_json::from_str(body) {
        Ok(parsed) => parsed,
        Err(err) => return SolveResponse::failure(format!("bad request: {err}")),
    };
    let payouts = parsed.payouts.unwrap_or_else(default_payouts);
    match solve(&parsed.board, &payouts) {
        Ok(analysis) => SolveResponse::success(analysis),
        Err(err) => SolveResponse::failure(err.to_string()),
    }
}

fn json_response<T: Serialize>(
    body: &T,
) -> Result<Response<Cursor<Vec<u8>>>, Box<dyn std::error::Error>> {
    let body = serde_json::to_vec_pretty(body)?;
    let header = Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..])
        .map_err(|_| "content-type header")?;
    Ok(Response::from_data(body).with_header(header))
}

//! HTTP response handlers.

use crate::embed::EmbeddedAsset;
use crate::utils::mime::types::{HTML, PLAIN};
use anyhow::Result;
use std::io::Read;
use tiny_http::{Header, Method, Request, Response, StatusCode};

/// Respond with the freshly rendered page.
pub fn respond_page(request: Request, html: String) -> Result<()> {
    if is_head_request(&request) {
        return send_head(request, 200, HTML);
    }
    send_body(request, 200, HTML, html.into_bytes())
}

/// Respond with an embedded asset.
pub fn respond_asset(request: Request, asset: EmbeddedAsset) -> Result<()> {
    if is_head_request(&request) {
        return send_head(request, 200, asset.mime());
    }
    send_body(request, 200, asset.mime(), asset.content.as_bytes().to_vec())
}

/// Respond with 404.
pub fn respond_not_found(request: Request) -> Result<()> {
    if is_head_request(&request) {
        return send_head(request, 404, PLAIN);
    }
    send_body(request, 404, PLAIN, b"404 Not Found".to_vec())
}

/// Respond with 405 for anything but GET and HEAD.
pub fn respond_method_not_allowed(request: Request) -> Result<()> {
    send_body(request, 405, PLAIN, b"405 Method Not Allowed".to_vec())
}

/// Respond with 503 Service Unavailable (server shutting down).
pub fn respond_unavailable(request: Request) -> Result<()> {
    send_body(request, 503, PLAIN, b"503 Service Unavailable".to_vec())
}

/// Respond with the reason the page could not be rendered (500).
pub fn respond_render_error(request: Request, error: &anyhow::Error) -> Result<()> {
    let error_str = format!("{error:#}");
    let msg = crate::utils::html::escape(&error_str);
    let body = format!(
        "<!DOCTYPE html><html><head><title>Config Error</title></head>\
         <body><h1>Config Error</h1><pre>{msg}</pre>\
         <p>Fix the config file and reload.</p></body></html>",
    );
    send_body(request, 500, HTML, body.into_bytes())
}

fn is_head_request(request: &Request) -> bool {
    request.method() == &Method::Head
}

fn send_head(request: Request, status: u16, content_type: &'static str) -> Result<()> {
    let response = with_headers(Response::empty(StatusCode(status)), content_type);
    request.respond(response)?;
    Ok(())
}

fn send_body(
    request: Request,
    status: u16,
    content_type: &'static str,
    body: Vec<u8>,
) -> Result<()> {
    let response = with_headers(
        Response::from_data(body).with_status_code(StatusCode(status)),
        content_type,
    );
    request.respond(response)?;
    Ok(())
}

/// Attach content type, and disable caching so every reload re-renders.
fn with_headers<R: Read>(mut response: Response<R>, content_type: &'static str) -> Response<R> {
    for (key, value) in [("Content-Type", content_type), ("Cache-Control", "no-store")] {
        if let Ok(header) = Header::from_bytes(key, value) {
            response.add_header(header);
        }
    }
    response
}

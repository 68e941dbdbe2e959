//! HTTP handler functions for the card-parse API.

use actix_multipart::Multipart;
use actix_web::HttpResponse;
use card_parse_server_models::{ApiError, ApiHealth, ApiParseResponse, ApiStatement};
use futures::StreamExt as _;

/// Maximum characters of extracted text echoed back in previews.
const PREVIEW_LEN: usize = 500;

/// Minimum extracted-text length considered usable. Anything shorter is
/// treated as an image-based or protected PDF.
const MIN_TEXT_LEN: usize = 50;

/// `GET /api/health`
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(ApiHealth {
        healthy: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `POST /api/parse`
///
/// Accepts a multipart upload with a `file` part containing a statement PDF
/// and returns the extracted fields, or a structured error payload.
pub async fn parse(payload: Multipart) -> HttpResponse {
    let upload = match read_upload(payload).await {
        Ok(Some(upload)) => upload,
        Ok(None) => return bad_request("No file provided"),
        Err(e) => {
            log::error!("Failed to read multipart upload: {e}");
            return HttpResponse::InternalServerError().json(ApiError {
                error: "Error processing PDF".to_owned(),
                raw_text_preview: None,
            });
        }
    };

    if upload.filename.is_empty() {
        return bad_request("No file selected");
    }

    if !is_pdf_filename(&upload.filename) {
        return bad_request("Only PDF files are allowed");
    }

    let text = match card_parse_pdf::extract_text(&upload.bytes) {
        Ok(text) => text,
        Err(e) => {
            log::warn!("Text extraction failed for '{}': {e}", upload.filename);
            String::new()
        }
    };

    parse_text_response(&text)
}

/// An uploaded file: original filename plus raw bytes.
struct Upload {
    filename: String,
    bytes: Vec<u8>,
}

/// Reads the `file` part of a multipart upload.
///
/// Returns `Ok(None)` when the payload contains no `file` part.
async fn read_upload(
    mut payload: Multipart,
) -> Result<Option<Upload>, actix_multipart::MultipartError> {
    while let Some(item) = payload.next().await {
        let mut field = item?;

        let (name, filename) = {
            let Some(cd) = field.content_disposition() else {
                continue;
            };
            (
                cd.get_name().map(ToOwned::to_owned),
                cd.get_filename().map(ToOwned::to_owned),
            )
        };

        if name.as_deref() != Some("file") {
            continue;
        }

        let mut bytes = Vec::new();
        while let Some(chunk) = field.next().await {
            bytes.extend_from_slice(&chunk?);
        }

        return Ok(Some(Upload {
            filename: filename.unwrap_or_default(),
            bytes,
        }));
    }

    Ok(None)
}

/// Maps extracted statement text to the parse endpoint's HTTP response.
fn parse_text_response(text: &str) -> HttpResponse {
    if text.len() < MIN_TEXT_LEN {
        return bad_request(
            "Could not extract sufficient text from PDF. The PDF might be image-based or protected.",
        );
    }

    let parsed = card_parse_parser::parse_statement(text);
    let preview = preview(text);

    if parsed.is_empty() {
        return HttpResponse::BadRequest().json(ApiError {
            error: "Could not extract any information. Please check if this is a valid credit card statement."
                .to_owned(),
            raw_text_preview: Some(preview),
        });
    }

    log::info!(
        "Parsed statement from '{}' ({}/4 fields)",
        parsed.issuer,
        parsed.field_count()
    );

    HttpResponse::Ok().json(ApiParseResponse {
        success: true,
        data: ApiStatement::from_parsed(parsed, preview),
    })
}

/// Returns `true` for filenames with a `.pdf` extension, case-insensitive.
fn is_pdf_filename(name: &str) -> bool {
    std::path::Path::new(name)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}

/// Truncates extracted text for response previews, respecting character
/// boundaries.
fn preview(text: &str) -> String {
    if text.len() <= PREVIEW_LEN {
        return text.to_owned();
    }

    let mut end = PREVIEW_LEN;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &text[..end])
}

/// Builds a 400 response with the given user-facing message.
fn bad_request(message: &str) -> HttpResponse {
    HttpResponse::BadRequest().json(ApiError {
        error: message.to_owned(),
        raw_text_preview: None,
    })
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;

    use super::*;

    #[test]
    fn pdf_filenames_match_case_insensitively() {
        assert!(is_pdf_filename("statement.pdf"));
        assert!(is_pdf_filename("STATEMENT.PDF"));
        assert!(!is_pdf_filename("statement.txt"));
        assert!(!is_pdf_filename("statement"));
        assert!(!is_pdf_filename(""));
    }

    #[test]
    fn short_previews_pass_through() {
        assert_eq!(preview("short text"), "short text");
    }

    #[test]
    fn long_previews_are_truncated() {
        let text = "x".repeat(PREVIEW_LEN + 100);
        let out = preview(&text);
        assert_eq!(out.len(), PREVIEW_LEN + 3);
        assert!(out.ends_with("..."));
    }

    #[test]
    fn preview_respects_multibyte_boundaries() {
        let text = "₹".repeat(PREVIEW_LEN);
        let out = preview(&text);
        assert!(out.ends_with("..."));
    }

    #[test]
    fn short_text_is_rejected() {
        let resp = parse_text_response("too short");
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn unparseable_text_is_rejected_distinctly() {
        let text = "A long enough document that mentions no bank and carries none \
                    of the labels a credit card statement would have.";
        let resp = parse_text_response(text);
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn valid_statement_text_succeeds() {
        let text = "HDFC Bank Credit Card Statement\n\
                    Card ending in 4321\n\
                    Payment Due Date: 05-Jan-2025\n\
                    Total Amount Due: Rs. 5,432.10\n";
        let resp = parse_text_response(text);
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn health_reports_healthy() {
        let resp = health().await;
        assert_eq!(resp.status(), StatusCode::OK);
    }
}

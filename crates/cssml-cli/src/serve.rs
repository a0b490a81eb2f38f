//! Static file server for built pages.
//!
//! `/` serves `index.html`; any other path is looked up under the root
//! directory. Anything that cannot be served is a 404.

use crate::CliError;
use std::fs::File;
use std::path::{Component, Path, PathBuf};
use tiny_http::{Header, Request, Response, Server};

/// Serve `root` on all interfaces until the process is stopped.
pub fn serve(root: &Path, port: u16) -> Result<(), CliError> {
    let server = Server::http(("0.0.0.0", port)).map_err(|e| CliError::Server(e.to_string()))?;
    log::info!("Serving {} at http://localhost:{port}", root.display());

    for request in server.incoming_requests() {
        if let Err(e) = respond(root, request) {
            log::warn!("failed to send response: {e}");
        }
    }

    Ok(())
}

fn respond(root: &Path, request: Request) -> std::io::Result<()> {
    let url = request.url().to_string();

    let found = resolve_path(root, &url).and_then(|path| open_file(&path).map(|f| (path, f)));
    let Some((path, file)) = found else {
        log::info!("{} {url} -> 404", request.method());
        return request.respond(Response::from_string("Not Found").with_status_code(404));
    };

    log::info!("{} {url} -> {}", request.method(), path.display());
    let header = Header::from_bytes(&b"Content-Type"[..], content_type(&path).as_bytes())
        .map_err(|()| std::io::Error::other("invalid Content-Type header"))?;
    request.respond(Response::from_file(file).with_header(header))
}

/// Map a request URL to a file under `root`. Query strings and fragments
/// are ignored; paths that climb out of `root` map to nothing.
pub fn resolve_path(root: &Path, url: &str) -> Option<PathBuf> {
    let path = url.split(['?', '#']).next().unwrap_or_default();
    let relative = path.trim_start_matches('/');
    if relative.is_empty() {
        return Some(root.join("index.html"));
    }

    let relative = Path::new(relative);
    let contained = relative
        .components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
    contained.then(|| root.join(relative))
}

/// `text/css` for `.css` paths, `text/html` for everything else.
pub fn content_type(path: &Path) -> &'static str {
    if path.to_string_lossy().ends_with(".css") {
        "text/css"
    } else {
        "text/html"
    }
}

fn open_file(path: &Path) -> Option<File> {
    let file = File::open(path).ok()?;
    file.metadata().ok()?.is_file().then_some(file)
}

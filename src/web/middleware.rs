use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::task::{Context, Poll};

use actix_web::{
    Error,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::header::{HeaderName, HeaderValue},
};
use futures_util::future::{Ready, ok};

/// Allows the hydration bundle (`/pkg/*.js` + wasm) and remote recipe images.
pub const CONTENT_SECURITY_POLICY: &str = "default-src 'self'; \
     script-src 'self' 'unsafe-inline' 'wasm-unsafe-eval'; \
     style-src 'self' 'unsafe-inline'; \
     img-src 'self' data: https: http:; \
     connect-src 'self' ws: wss:; \
     frame-ancestors 'none'";

/// Adds a fixed set of security headers to every response. Headers a handler
/// already set are left alone.
#[derive(Clone, Debug)]
pub struct SecurityHeaders {
    headers: Rc<Vec<(HeaderName, HeaderValue)>>,
}

impl Default for SecurityHeaders {
    fn default() -> Self {
        Self::empty()
            .with("x-frame-options", "DENY")
            .with("x-content-type-options", "nosniff")
            .with("referrer-policy", "strict-origin-when-cross-origin")
            .with("content-security-policy", CONTENT_SECURITY_POLICY)
    }
}

impl SecurityHeaders {
    pub fn empty() -> Self {
        Self {
            headers: Rc::new(Vec::new()),
        }
    }

    /// Adds or replaces a header. Both parts must be static, valid header text.
    pub fn with(mut self, name: &'static str, value: &'static str) -> Self {
        let name = HeaderName::from_static(name);
        let value = HeaderValue::from_static(value);
        let headers = Rc::make_mut(&mut self.headers);
        headers.retain(|(existing, _)| *existing != name);
        headers.push((name, value));
        self
    }

    pub fn headers(&self) -> impl Iterator<Item = (&HeaderName, &HeaderValue)> {
        self.headers.iter().map(|(n, v)| (n, v))
    }
}

impl<S, B> Transform<S, ServiceRequest> for SecurityHeaders
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = SecurityHeadersMiddleware<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(SecurityHeadersMiddleware {
            service,
            headers: Rc::clone(&self.headers),
        })
    }
}

pub struct SecurityHeadersMiddleware<S> {
    service: S,
    headers: Rc<Vec<(HeaderName, HeaderValue)>>,
}

impl<S, B> Service<ServiceRequest> for SecurityHeadersMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let fut = self.service.call(req);
        let headers = Rc::clone(&self.headers);

        Box::pin(async move {
            let mut res = fut.await?;

            let response_headers = res.headers_mut();
            for (name, value) in headers.iter() {
                if !response_headers.contains_key(name) {
                    response_headers.insert(name.clone(), value.clone());
                }
            }

            Ok(res)
        })
    }
}

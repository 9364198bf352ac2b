use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn filename(&self) -> &str;
    fn skip_header(&self) -> bool;
    fn from_domain(&self) -> Option<&str>;
    fn to_domain(&self) -> Option<&str>;
    fn report_path(&self) -> Option<&str>;
}

/// The first response to a GET, before any redirect is followed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResponse {
    pub status: u16,
    /// `Location` resolved against the request URL, when present and resolvable.
    pub location: Option<String>,
}

#[async_trait]
pub trait RedirectProbe: Send + Sync {
    async fn probe(&self, url: &str) -> Result<ProbeResponse>;
}

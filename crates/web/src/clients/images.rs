use super::{ClientError, Result};

/// The managed object store holding candidate images. Upload returns the
/// public URL persisted on the candidate row; remove takes the object name
/// recovered from that URL.
#[async_trait::async_trait]
pub trait ImageStore: Send + Sync {
    async fn upload(&self, object_name: &str, bytes: Vec<u8>, content_type: &str)
    -> Result<String>;
    async fn remove(&self, object_name: &str) -> Result<()>;
    fn object_name_from_url(&self, url: &str) -> Option<String>;
}

pub struct HttpImageStore {
    base_url: String,
    service_key: String,
    bucket: String,
    client: reqwest::Client,
}

impl HttpImageStore {
    pub fn new(base_url: &str, service_key: &str, bucket: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            service_key: service_key.to_string(),
            bucket: bucket.to_string(),
            client: reqwest::Client::new(),
        }
    }

    fn public_url(&self, object_name: &str) -> String {
        format!(
            "{}/object/public/{}/{}",
            self.base_url, self.bucket, object_name
        )
    }

    async fn service_error(response: reqwest::Response) -> ClientError {
        let status = response.status();
        let message = response
            .text()
            .await
            .ok()
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| format!("Object storage returned {}", status));

        ClientError::Service(message)
    }
}

#[async_trait::async_trait]
impl ImageStore for HttpImageStore {
    async fn upload(
        &self,
        object_name: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String> {
        let url = format!("{}/object/{}/{}", self.base_url, self.bucket, object_name);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.service_key)
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(bytes)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::service_error(response).await);
        }

        Ok(self.public_url(object_name))
    }

    async fn remove(&self, object_name: &str) -> Result<()> {
        let url = format!("{}/object/{}/{}", self.base_url, self.bucket, object_name);

        let response = self
            .client
            .delete(&url)
            .bearer_auth(&self.service_key)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::service_error(response).await);
        }

        Ok(())
    }

    fn object_name_from_url(&self, url: &str) -> Option<String> {
        object_name_in_bucket(url, &self.bucket)
    }
}

/// Recover the object name from a public URL: everything after the last
/// `/{bucket}/` segment.
pub fn object_name_in_bucket(url: &str, bucket: &str) -> Option<String> {
    let marker = format!("/{}/", bucket);
    url.rfind(&marker)
        .map(|idx| url[idx + marker.len()..].to_string())
        .filter(|name| !name.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recovers_object_name_from_public_url() {
        let url = "https://storage.example/object/public/candidates/candidate_2025_3_abc.png";

        assert_eq!(
            object_name_in_bucket(url, "candidates").as_deref(),
            Some("candidate_2025_3_abc.png")
        );
    }

    #[test]
    fn missing_bucket_segment_yields_none() {
        assert_eq!(
            object_name_in_bucket("https://storage.example/other/x.png", "candidates"),
            None
        );
        assert_eq!(
            object_name_in_bucket("https://storage.example/object/public/candidates/", "candidates"),
            None
        );
    }
}

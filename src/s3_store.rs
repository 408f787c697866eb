use async_trait::async_trait;
use aws_config::meta::region::RegionProviderChain;
use aws_config::{BehaviorVersion, Region};
use aws_credential_types::Credentials;
use aws_sdk_s3::error::{ProvideErrorMetadata, SdkError};
use aws_sdk_s3::primitives::ByteStream as AwsByteStream;
use aws_sdk_s3::Client;
use bytes::Bytes;

use crate::{ObjectStore, PutResult, S3Config, StoreError, StoreResult};

/// Production store implementation using the AWS SDK (S3-compatible)
#[derive(Clone)]
pub struct S3ObjectStore {
    client: Client,
}

impl S3ObjectStore {
    /// Build a store from explicit settings
    pub async fn new(config: S3Config) -> Self {
        let client = Self::create_client(config).await;
        Self { client }
    }

    /// Build a store from `STOWAGE_*` environment variables
    pub async fn from_env() -> Self {
        Self::new(S3Config::from_env()).await
    }

    /// Wrap an externally constructed SDK client
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }

    async fn create_client(config: S3Config) -> Client {
        let region_provider = RegionProviderChain::first_try(config.region.map(Region::new))
            .or_default_provider()
            .or_else(Region::new("us-east-1"));

        let mut loader = aws_config::defaults(BehaviorVersion::latest()).region(region_provider);

        if let (Some(access_key_id), Some(secret_access_key)) =
            (config.access_key_id, config.secret_access_key)
        {
            loader = loader.credentials_provider(Credentials::new(
                access_key_id,
                secret_access_key,
                None,
                None,
                "stowage",
            ));
        }

        if let Some(endpoint_url) = config.endpoint_url {
            loader = loader.endpoint_url(endpoint_url);
        }

        let aws_config = loader.load().await;

        Client::from_conf(
            aws_sdk_s3::config::Builder::from(&aws_config)
                .force_path_style(config.force_path_style)
                .build(),
        )
    }

    fn map_sdk_error<E>(bucket: &str, key: &str, err: SdkError<E>) -> StoreError
    where
        E: ProvideErrorMetadata + std::error::Error + Send + Sync + 'static,
    {
        match err.code() {
            Some("NoSuchKey") | Some("NoSuchBucket") | Some("NotFound") => {
                StoreError::not_found(bucket, key)
            }
            _ => StoreError::backend(err),
        }
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn get(&self, bucket: &str, key: &str) -> StoreResult<Bytes> {
        let result = self
            .client
            .get_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|err| Self::map_sdk_error(bucket, key, err))?;

        // Full-buffer contract: aggregate the body before returning
        let body = result.body.collect().await.map_err(StoreError::backend)?;
        Ok(body.into_bytes())
    }

    async fn put(&self, bucket: &str, key: &str, payload: Bytes) -> StoreResult<PutResult> {
        let size_bytes = payload.len() as u64;

        let result = self
            .client
            .put_object()
            .bucket(bucket)
            .key(key)
            .body(AwsByteStream::from(payload))
            .send()
            .await
            .map_err(|err| Self::map_sdk_error(bucket, key, err))?;

        Ok(PutResult {
            etag: result.e_tag,
            size_bytes,
        })
    }

    async fn copy(&self, bucket: &str, source_key: &str, dest_key: &str) -> StoreResult<()> {
        self.client
            .copy_object()
            .copy_source(format!("{}/{}", bucket, source_key))
            .bucket(bucket)
            .key(dest_key)
            .send()
            .await
            .map_err(|err| Self::map_sdk_error(bucket, source_key, err))?;
        Ok(())
    }

    async fn delete(&self, bucket: &str, key: &str) -> StoreResult<()> {
        self.client
            .delete_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|err| Self::map_sdk_error(bucket, key, err))?;
        Ok(())
    }
}

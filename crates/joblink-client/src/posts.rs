//! Feed posts and comments.

use reqwest::multipart::Form;
use serde_json::{json, Value};

use joblink_models::{constants::defaults::MAX_IMAGES_PER_POST, validate_image_upload, Comment, Post};

use crate::client::{decode, decode_list, ApiClient, FileUpload};
use crate::error::{ApiError, ApiResult};

/// Operations under `/api-post/`.
pub struct PostsService {
    client: ApiClient,
}

impl PostsService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// The shared feed, newest first.
    pub async fn list(&self) -> ApiResult<Vec<Post>> {
        decode_list(self.client.get("/api-post/posts/").await?)
    }

    /// Only the current user's posts.
    pub async fn my_posts(&self) -> ApiResult<Vec<Post>> {
        decode_list(self.client.get("/api-post/posts/my_posts/").await?)
    }

    /// Publish a post with up to four images.
    pub async fn create(&self, content: &str, images: Vec<FileUpload>) -> ApiResult<Post> {
        let form = self.post_form_body(content, images)?;
        decode(self.client.post_form("/api-post/posts/", form).await?)
    }

    /// Edit an own post. Authorship is enforced by the backend.
    pub async fn update(
        &self,
        post_id: i64,
        content: &str,
        images: Vec<FileUpload>,
    ) -> ApiResult<Post> {
        let form = self.post_form_body(content, images)?;
        decode(
            self.client
                .patch_form(&format!("/api-post/posts/{post_id}/"), form)
                .await?,
        )
    }

    pub async fn delete(&self, post_id: i64) -> ApiResult<()> {
        self.client
            .delete(&format!("/api-post/posts/{post_id}/"))
            .await?;
        Ok(())
    }

    pub async fn like(&self, post_id: i64) -> ApiResult<Value> {
        self.client
            .post(&format!("/api-post/posts/{post_id}/like/"), &json!({}))
            .await
    }

    pub async fn unlike(&self, post_id: i64) -> ApiResult<Value> {
        self.client
            .post(&format!("/api-post/posts/{post_id}/unlike/"), &json!({}))
            .await
    }

    // =========================================================================
    // Comments
    // =========================================================================

    pub async fn comments(&self, post_id: i64) -> ApiResult<Vec<Comment>> {
        decode_list(
            self.client
                .get(&format!("/api-post/posts/{post_id}/comments/"))
                .await?,
        )
    }

    pub async fn add_comment(&self, post_id: i64, text: &str) -> ApiResult<Comment> {
        if text.trim().is_empty() {
            return Err(ApiError::validation("Comment text is required"));
        }
        decode(
            self.client
                .post(
                    &format!("/api-post/posts/{post_id}/comments/add/"),
                    &json!({ "text": text }),
                )
                .await?,
        )
    }

    pub async fn update_comment(&self, comment_id: i64, text: &str) -> ApiResult<Comment> {
        if text.trim().is_empty() {
            return Err(ApiError::validation("Comment text is required"));
        }
        decode(
            self.client
                .patch(
                    &format!("/api-post/comments/{comment_id}/"),
                    &json!({ "text": text }),
                )
                .await?,
        )
    }

    pub async fn delete_comment(&self, comment_id: i64) -> ApiResult<()> {
        self.client
            .delete(&format!("/api-post/comments/{comment_id}/"))
            .await?;
        Ok(())
    }

    // =========================================================================
    // Internal Helpers
    // =========================================================================

    fn post_form_body(&self, content: &str, images: Vec<FileUpload>) -> ApiResult<Form> {
        if content.trim().is_empty() && images.is_empty() {
            return Err(ApiError::validation("Post content is required"));
        }
        if images.len() > MAX_IMAGES_PER_POST {
            return Err(ApiError::validation(format!(
                "A post can carry at most {MAX_IMAGES_PER_POST} images"
            )));
        }
        for image in &images {
            validate_image_upload(&image.file_name, image.size())?;
        }

        let mut form = Form::new().text("content", content.to_string());
        for image in images {
            form = form.part("images", image.into_part());
        }
        Ok(form)
    }
}

//! User and company profiles.

use reqwest::multipart::Form;
use serde_json::Value;

use joblink_models::{
    validate_image_upload, CompanyProfile, EducationEntry, PublicProfile, Role, UserProfile,
    UserSummary,
};

use crate::client::{decode, decode_list, ApiClient, FileUpload};
use crate::error::ApiResult;

/// Operations under `/profiles/` and the account-profile endpoint.
pub struct ProfileService {
    client: ApiClient,
}

impl ProfileService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn user_profile(&self) -> ApiResult<UserProfile> {
        decode(self.client.get("/profiles/user-profile/").await?)
    }

    pub async fn update_user_profile(&self, profile: &UserProfile) -> ApiResult<UserProfile> {
        decode(self.client.patch("/profiles/user-profile/", profile).await?)
    }

    pub async fn company_profile(&self) -> ApiResult<CompanyProfile> {
        decode(self.client.get("/profiles/company-profile/").await?)
    }

    pub async fn update_company_profile(
        &self,
        profile: &CompanyProfile,
    ) -> ApiResult<CompanyProfile> {
        decode(
            self.client
                .patch("/profiles/company-profile/", profile)
                .await?,
        )
    }

    /// Anyone's public profile slice.
    pub async fn public_profile(&self, user_id: i64) -> ApiResult<PublicProfile> {
        decode(
            self.client
                .get(&format!("/profiles/public-profile/{user_id}/"))
                .await?,
        )
    }

    pub async fn public_users(&self) -> ApiResult<Vec<UserSummary>> {
        decode_list(self.client.get("/profiles/public-users/").await?)
    }

    /// Upload a profile image.
    ///
    /// Company accounts upload to the company profile under `company_logo`;
    /// everyone else to the user profile under `profile_image`.
    pub async fn upload_profile_image(&self, image: FileUpload) -> ApiResult<Value> {
        validate_image_upload(&image.file_name, image.size())?;

        let is_company = matches!(
            self.client.session().get().map(|s| s.role),
            Some(Role::Company)
        );
        let (path, field) = if is_company {
            ("/profiles/company-profile/", "company_logo")
        } else {
            ("/profiles/user-profile/", "profile_image")
        };

        let form = Form::new().part(field, image.into_part());
        self.client.patch_form(path, form).await
    }

    /// Replace the education list wholesale.
    pub async fn save_education(
        &self,
        education: &[EducationEntry],
    ) -> ApiResult<Vec<EducationEntry>> {
        decode_list(self.client.put("/profiles/education/", education).await?)
    }

    /// Update the basic account fields (names) kept outside the profile.
    pub async fn update_account(&self, data: &Value) -> ApiResult<Value> {
        self.client.patch("/accounts/update-profile/", data).await
    }
}

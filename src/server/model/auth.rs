use crate::model::auth::SignInResponseDto;

/// Token pair issued on sign-in.
#[derive(Debug, Clone)]
pub struct AuthTokens {
    pub access_token: String,
    pub refresh_token: String,
}

impl AuthTokens {
    pub fn into_dto(self) -> SignInResponseDto {
        SignInResponseDto {
            access_token: self.access_token,
            refresh_token: self.refresh_token,
        }
    }
}

mod credentials;
pub mod jwt;

pub use credentials::{Credentials, ADMIN_SECRET_HEADER, ROLE_HEADER};
pub use jwt::{HasuraClaimSet, HasuraClaims, JwtService};

pub use super::track_record::Entity as TrackRecord;
pub use super::user_status::Entity as UserStatus;

pub use super::service::Entity as Service;
pub use super::service_translation::Entity as ServiceTranslation;
pub use super::team_member::Entity as TeamMember;
pub use super::team_member_translation::Entity as TeamMemberTranslation;

//! Team member factory for creating test entities and translations.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use serde_json::Value;

use crate::factory::helpers::{next_id, team_member_document};

pub struct TeamMemberFactory<'a> {
    db: &'a DatabaseConnection,
    image: Option<String>,
    order_number: i32,
}

impl<'a> TeamMemberFactory<'a> {
    /// Defaults:
    /// - image: `"team_images/member_{id}.png"` where id is auto-incremented
    /// - order_number: the same auto-incremented id, so default members list
    ///   in creation order
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            image: Some(format!("team_images/member_{id}.png")),
            order_number: id as i32,
        }
    }

    pub fn image(mut self, image: Option<String>) -> Self {
        self.image = image;
        self
    }

    pub fn order_number(mut self, order_number: i32) -> Self {
        self.order_number = order_number;
        self
    }

    pub async fn build(self) -> Result<entity::team_member::Model, DbErr> {
        entity::team_member::ActiveModel {
            image: ActiveValue::Set(self.image),
            order_number: ActiveValue::Set(self.order_number),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a team member with default values.
pub async fn create_team_member(
    db: &DatabaseConnection,
) -> Result<entity::team_member::Model, DbErr> {
    TeamMemberFactory::new(db).build().await
}

/// Inserts a translation row for `team_member_id` at `language` with a
/// minimal document whose name is unique per call.
pub async fn create_team_member_translation(
    db: &DatabaseConnection,
    team_member_id: i32,
    language: &str,
) -> Result<entity::team_member_translation::Model, DbErr> {
    let name = format!("Member {}", next_id());
    create_team_member_translation_with_document(
        db,
        team_member_id,
        language,
        team_member_document(&name),
    )
    .await
}

/// Inserts a translation row with the given document.
pub async fn create_team_member_translation_with_document(
    db: &DatabaseConnection,
    team_member_id: i32,
    language: &str,
    document: Value,
) -> Result<entity::team_member_translation::Model, DbErr> {
    entity::team_member_translation::ActiveModel {
        team_member_id: ActiveValue::Set(team_member_id),
        language: ActiveValue::Set(language.to_string()),
        document: ActiveValue::Set(document),
        ..Default::default()
    }
    .insert(db)
    .await
}

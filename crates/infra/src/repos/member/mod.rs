mod inmemory;
mod postgres;

use lingora_domain::{FamilyMember, ID};

pub use inmemory::InMemoryMemberRepo;
pub use postgres::PostgresMemberRepo;

#[async_trait::async_trait]
pub trait IMemberRepo: Send + Sync {
    async fn insert(&self, member: &FamilyMember) -> anyhow::Result<()>;
    async fn save(&self, member: &FamilyMember) -> anyhow::Result<()>;
    async fn find(&self, member_id: &ID) -> Option<FamilyMember>;
    async fn find_by_user(&self, user_id: &ID) -> Vec<FamilyMember>;
    async fn delete(&self, member_id: &ID) -> Option<FamilyMember>;
}

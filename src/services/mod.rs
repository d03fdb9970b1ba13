// Service exports
pub mod ai;
pub mod notify;
pub mod supabase;

pub use ai::{parse_skill_list, ExtractError, SkillExtractor};
pub use notify::WebhookNotifier;
pub use supabase::{SupabaseClient, SupabaseError, SupabaseTables};

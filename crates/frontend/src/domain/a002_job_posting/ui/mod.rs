mod card;
mod list;

pub use card::JobCard;
pub use list::JobList;

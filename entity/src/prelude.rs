pub use super::investment::Entity as Investment;
pub use super::lgr_award::Entity as LgrAward;
pub use super::listing::Entity as Listing;
pub use super::matrix_position::Entity as MatrixPosition;
pub use super::member::Entity as Member;
pub use super::point_transaction::Entity as PointTransaction;
pub use super::profit_distribution::Entity as ProfitDistribution;
pub use super::profit_share::Entity as ProfitShare;
pub use super::referral_commission::Entity as ReferralCommission;
pub use super::support_ticket::Entity as SupportTicket;
pub use super::venture::Entity as Venture;
pub use super::wedding_card::Entity as WeddingCard;

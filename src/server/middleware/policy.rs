//! Central access policy.
//!
//! Every guarded route names a `(Resource, Action)` pair; the table below decides who may
//! call it. Pairs missing from the table deny everyone.

use entity::sea_orm_active_enums::UserRole;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Auth,
    User,
    Profile,
    Category,
    Product,
    BiddingHistory,
    AuctionWinner,
    Message,
    Payment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    SignUp,
    SignIn,
    RefreshToken,
    Create,
    List,
    Read,
    Update,
    Delete,
    ListByCategory,
    StartBidding,
    EndBidding,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// No token required.
    Public,
    /// Valid access token whose role is in the list.
    Roles(&'static [UserRole]),
}

const ADMIN: Access = Access::Roles(&[UserRole::Admin]);
const MEMBERS: Access = Access::Roles(&[UserRole::Admin, UserRole::User]);

static POLICY: &[(Resource, Action, Access)] = &[
    (Resource::Auth, Action::SignUp, Access::Public),
    (Resource::Auth, Action::SignIn, Access::Public),
    (Resource::Auth, Action::RefreshToken, Access::Public),
    (Resource::User, Action::List, ADMIN),
    (Resource::User, Action::Read, ADMIN),
    (Resource::User, Action::Update, ADMIN),
    (Resource::User, Action::Delete, ADMIN),
    (Resource::Profile, Action::Read, MEMBERS),
    (Resource::Profile, Action::Update, MEMBERS),
    (Resource::Category, Action::List, Access::Public),
    (Resource::Category, Action::Read, ADMIN),
    (Resource::Category, Action::Create, ADMIN),
    (Resource::Category, Action::Update, ADMIN),
    (Resource::Category, Action::Delete, ADMIN),
    (Resource::Product, Action::List, Access::Public),
    (Resource::Product, Action::Read, Access::Public),
    (Resource::Product, Action::ListByCategory, Access::Public),
    (Resource::Product, Action::Create, ADMIN),
    (Resource::Product, Action::Update, ADMIN),
    (Resource::Product, Action::Delete, ADMIN),
    (Resource::Product, Action::StartBidding, ADMIN),
    (Resource::Product, Action::EndBidding, ADMIN),
    (Resource::BiddingHistory, Action::Create, MEMBERS),
    (Resource::BiddingHistory, Action::List, ADMIN),
    (Resource::BiddingHistory, Action::Read, ADMIN),
    (Resource::BiddingHistory, Action::Update, ADMIN),
    (Resource::BiddingHistory, Action::Delete, ADMIN),
    (Resource::AuctionWinner, Action::Create, MEMBERS),
    (Resource::AuctionWinner, Action::List, ADMIN),
    (Resource::AuctionWinner, Action::Read, ADMIN),
    (Resource::AuctionWinner, Action::Update, ADMIN),
    (Resource::AuctionWinner, Action::Delete, ADMIN),
    (Resource::Message, Action::Create, MEMBERS),
    (Resource::Message, Action::List, MEMBERS),
    (Resource::Message, Action::Read, ADMIN),
    (Resource::Message, Action::Update, ADMIN),
    (Resource::Message, Action::Delete, ADMIN),
    (Resource::Payment, Action::Update, MEMBERS),
    (Resource::Payment, Action::Create, ADMIN),
    (Resource::Payment, Action::List, ADMIN),
    (Resource::Payment, Action::Read, ADMIN),
    (Resource::Payment, Action::Delete, ADMIN),
];

/// Looks up who may perform `action` on `resource`.
///
/// Returns `None` for pairs without an entry, which callers must treat as deny-all.
pub fn access_for(resource: Resource, action: Action) -> Option<Access> {
    POLICY
        .iter()
        .find(|(r, a, _)| *r == resource && *a == action)
        .map(|(_, _, access)| *access)
}

impl Access {
    pub fn permits(&self, role: UserRole) -> bool {
        match self {
            Access::Public => true,
            Access::Roles(roles) => roles.contains(&role),
        }
    }
}

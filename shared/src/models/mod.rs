//! Wire models
//!
//! DTO families per entity: the entity itself, its create/update payloads
//! and the nested read views the admin console consumes. All types use the
//! camelCase JSON contract of the admin API.

pub mod branch;
pub mod category;
pub mod contact;
pub mod menu;
pub mod page_section;
pub mod product;
pub mod user;

// Re-exports
pub use branch::{Branch, BranchCreate, BranchUpdate, Location, OrderLinks, WorkingHour};
pub use category::{
    Category, CategoryBrief, CategoryCreate, CategoryLinkBody, CategoryUpdate, CategoryView,
    CategoryWithProducts, MenuCategoryLink, MenuLinkBody,
};
pub use contact::{
    ContactInfo, ContactInfoUpdate, ContactRequest, ContactRequestCreate, ContactRequestReceipt,
    Social,
};
pub use menu::{Menu, MenuCreate, MenuTree, MenuUpdate, MenuWithCategories};
pub use page_section::{PageKey, PageSection, PageSectionUpsert};
pub use product::{
    CategoryProductLink, Macros, Nutrition, NutritionDetails, Product, ProductBrief,
    ProductCreate, ProductDetail, ProductLinkBody, ProductUpdate, ProductView,
};
pub use user::{TokenResponse, UserLogin, UserPublic, UserRegister, UserUpdate};

pub const BRAND_NAME: &str = "Luxe Estates";

pub const CONTACT_PHONE: &str = "+1 (310) 555-0139";
pub const CONTACT_EMAIL: &str = "hello@luxe-estates.com";
pub const CONTACT_ADDRESS: &str = "123 Canon Drive, Beverly Hills, CA";

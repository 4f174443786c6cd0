//! Fixed seed entities and the layout of the two product sheets.
//!
//! Everything here is static: the generator never invents ids, it only
//! references these rows from the rendered script.

use uuid::Uuid;

/// Unit written for rows whose unit cell is blank.
pub const DEFAULT_UNIT: &str = "UNIDAD";

/// Role stored in `users.role`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    SuperAdmin,
    Admin,
    User,
}

impl Role {
    /// Database string representation.
    pub fn as_db_str(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "SUPERADMIN",
            Role::Admin => "ADMIN",
            Role::User => "USER",
        }
    }
}

/// Kind of product, stored in `products.product_type` and `categories.product_type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductType {
    Ingredient,
    Material,
}

impl ProductType {
    /// Database string representation.
    pub fn as_db_str(&self) -> &'static str {
        match self {
            ProductType::Ingredient => "INGREDIENT",
            ProductType::Material => "MATERIAL",
        }
    }
}

/// A development account seeded into `public.users`.
#[derive(Debug, Clone, Copy)]
pub struct SeedUser {
    pub id: Uuid,
    pub email: &'static str,
    /// Plaintext; hashed by pgcrypto when the script runs.
    pub password: &'static str,
    pub role: Role,
    pub nombre: &'static str,
    pub apellido1: &'static str,
    pub apellido2: &'static str,
    pub is_active: bool,
}

/// A row of `public.suppliers`.
#[derive(Debug, Clone, Copy)]
pub struct Supplier {
    pub id: Uuid,
    pub name: &'static str,
    pub is_active: bool,
}

/// A row of `public.categories`, unique on `(name, product_type)`.
#[derive(Debug, Clone, Copy)]
pub struct Category {
    pub id: Uuid,
    pub name: &'static str,
    pub product_type: ProductType,
}

/// Header names of the three columns read from a sheet.
#[derive(Debug, Clone, Copy)]
pub struct CsvColumns {
    pub name: &'static str,
    pub unit: &'static str,
    pub price: &'static str,
}

/// One spreadsheet export and how its rows become products.
#[derive(Debug, Clone, Copy)]
pub struct ProductTable {
    /// Upper-case label used in the script banners.
    pub label: &'static str,
    pub file_name: &'static str,
    pub columns: CsvColumns,
    /// Prefix of the generated product codes.
    pub code_prefix: &'static str,
    pub product_type: ProductType,
    pub category: Category,
}

pub const SUPERADMIN_ID: Uuid = Uuid::from_u128(0x11111111_1111_1111_1111_111111111111);

/// Every seeded product is attributed to the super admin.
pub const PRODUCT_CREATOR: Uuid = SUPERADMIN_ID;

pub const SEED_USERS: [SeedUser; 3] = [
    SeedUser {
        id: SUPERADMIN_ID,
        email: "admin@lovelace.edu",
        password: "SuperAdmin2026!",
        role: Role::SuperAdmin,
        nombre: "Ana",
        apellido1: "Martínez",
        apellido2: "López",
        is_active: true,
    },
    SeedUser {
        id: Uuid::from_u128(0x22222222_2222_2222_2222_222222222222),
        email: "carlos.ruiz@lovelace.edu",
        password: "Admin2026!",
        role: Role::Admin,
        nombre: "Carlos",
        apellido1: "Ruiz",
        apellido2: "Fernández",
        is_active: true,
    },
    SeedUser {
        id: Uuid::from_u128(0x33333333_3333_3333_3333_333333333333),
        email: "maria.garcia@lovelace.edu",
        password: "Usuario2026!",
        role: Role::User,
        nombre: "María",
        apellido1: "García",
        apellido2: "Sánchez",
        is_active: true,
    },
];

pub const SUPPLIER: Supplier = Supplier {
    id: Uuid::from_u128(0xaaaaaaaa_0000_0000_0000_000000000001),
    name: "Proveedor General",
    is_active: true,
};

pub const INGREDIENT_CATEGORY: Category = Category {
    id: Uuid::from_u128(0xbbbbbbbb_0000_0000_0000_000000000001),
    name: "Ingredientes",
    product_type: ProductType::Ingredient,
};

pub const MATERIAL_CATEGORY: Category = Category {
    id: Uuid::from_u128(0xbbbbbbbb_0000_0000_0000_000000000002),
    name: "Materiales",
    product_type: ProductType::Material,
};

pub const CATEGORIES: [Category; 2] = [INGREDIENT_CATEGORY, MATERIAL_CATEGORY];

pub const INGREDIENTS: ProductTable = ProductTable {
    label: "INGREDIENTES",
    file_name: "Ingredientes y Materiales - Ingredientes.csv",
    columns: CsvColumns {
        name: "INGREDIENTES",
        unit: "MEDIDA",
        price: "PRECIO",
    },
    code_prefix: "ING",
    product_type: ProductType::Ingredient,
    category: INGREDIENT_CATEGORY,
};

pub const MATERIALS: ProductTable = ProductTable {
    label: "MATERIALES",
    file_name: "Ingredientes y Materiales - Materiales.csv",
    columns: CsvColumns {
        name: "MATERIAL",
        unit: "MEDIDA",
        price: "PRECIO",
    },
    code_prefix: "MAT",
    product_type: ProductType::Material,
    category: MATERIAL_CATEGORY,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_ids_render_hyphenated() {
        assert_eq!(
            SUPERADMIN_ID.to_string(),
            "11111111-1111-1111-1111-111111111111"
        );
        assert_eq!(
            SUPPLIER.id.to_string(),
            "aaaaaaaa-0000-0000-0000-000000000001"
        );
        assert_eq!(
            MATERIAL_CATEGORY.id.to_string(),
            "bbbbbbbb-0000-0000-0000-000000000002"
        );
    }

    #[test]
    fn test_tables_map_to_their_category() {
        assert_eq!(INGREDIENTS.category.product_type, INGREDIENTS.product_type);
        assert_eq!(MATERIALS.category.product_type, MATERIALS.product_type);
        assert_ne!(INGREDIENTS.code_prefix, MATERIALS.code_prefix);
    }

    #[test]
    fn test_seed_user_emails_unique() {
        let emails: std::collections::HashSet<_> = SEED_USERS.iter().map(|u| u.email).collect();
        assert_eq!(emails.len(), SEED_USERS.len());
        assert_eq!(SEED_USERS[0].id, PRODUCT_CREATOR);
    }
}

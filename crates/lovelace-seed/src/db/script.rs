//! SQL seed script rendering.
//!
//! Every INSERT carries an `ON CONFLICT ... DO NOTHING` clause keyed on the
//! table's uniqueness constraint, so the script can be replayed against a
//! database that already holds the seed.

use tracing::info;

use super::escape::quote;
use crate::catalog::{
    CATEGORIES, INGREDIENTS, MATERIALS, PRODUCT_CREATOR, ProductTable, SEED_USERS, SUPPLIER,
};
use crate::generators::{GeneratedProduct, ProductGenerator, SourceRow};

const RULE: &str = "-- ============================================================";

/// Renders the full seed script for the two sheets.
pub fn render_script(ingredients: &[SourceRow], materials: &[SourceRow]) -> String {
    let ingredient_products = ProductGenerator::new(INGREDIENTS).generate_batch(ingredients);
    let material_products = ProductGenerator::new(MATERIALS).generate_batch(materials);

    let mut script = SeedScript::new();
    script.header();
    script.begin();
    script.extensions();
    script.seed_users();
    script.seed_suppliers();
    script.seed_categories();
    script.seed_products(&INGREDIENTS, &ingredient_products);
    script.seed_products(&MATERIALS, &material_products);
    script.seed_inventory();
    script.commit();

    script.finish()
}

/// Line-oriented builder for the seed script.
pub struct SeedScript {
    lines: Vec<String>,
}

impl SeedScript {
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    fn line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    fn banner(&mut self, titles: &[&str]) {
        self.line(RULE);
        for title in titles {
            self.line(format!("-- {title}"));
        }
        self.line(RULE);
    }

    pub fn header(&mut self) {
        self.banner(&[
            "002_seed.sql  –  Seed inicial del Proyecto Lovelace",
            "Generado automáticamente por lovelace-seed",
            "Basado en estructura_lovelace.sql (schema real)",
        ]);
        self.line("");
    }

    pub fn begin(&mut self) {
        self.line("BEGIN;");
        self.line("");
    }

    pub fn extensions(&mut self) {
        self.line("-- Extension uuid-ossp (por si no existe aún)");
        self.line("CREATE EXTENSION IF NOT EXISTS \"uuid-ossp\";");
        self.line("");
        self.line("-- Extension pgcrypto (para bcrypt en passwords)");
        self.line("CREATE EXTENSION IF NOT EXISTS pgcrypto;");
        self.line("");
    }

    /// Development accounts. Passwords are hashed by pgcrypto at insert time.
    pub fn seed_users(&mut self) {
        let width = SEED_USERS.iter().map(|u| u.email.len()).max().unwrap_or(0);

        self.line(RULE);
        self.line("-- USUARIOS");
        self.line("-- Credenciales de desarrollo:");
        for user in &SEED_USERS {
            self.line(format!("--   {:<width$} → {}", user.email, user.password));
        }
        self.line(RULE);

        self.line(
            "INSERT INTO public.users (id, email, password_hash, role, nombre, apellido1, apellido2, is_active)",
        );
        self.line("VALUES");

        let rows: Vec<String> = SEED_USERS
            .iter()
            .map(|user| {
                let fields = [
                    quote(&user.id.to_string()),
                    quote(user.email),
                    format!("crypt({}, gen_salt('bf', 10))", quote(user.password)),
                    quote(user.role.as_db_str()),
                    quote(user.nombre),
                    quote(user.apellido1),
                    quote(user.apellido2),
                    user.is_active.to_string(),
                ];
                format!("  (\n    {}\n  )", fields.join(",\n    "))
            })
            .collect();

        self.line(rows.join(",\n"));
        self.line("ON CONFLICT (email) DO NOTHING;");
        self.line("");
    }

    pub fn seed_suppliers(&mut self) {
        self.banner(&["PROVEEDORES"]);
        self.line("INSERT INTO public.suppliers (id, name, is_active)");
        self.line("VALUES");
        self.line(format!(
            "  ({}, {}, {})",
            quote(&SUPPLIER.id.to_string()),
            quote(SUPPLIER.name),
            SUPPLIER.is_active
        ));
        self.line("ON CONFLICT (name) DO NOTHING;");
        self.line("");
    }

    pub fn seed_categories(&mut self) {
        self.banner(&["CATEGORÍAS"]);
        self.line("INSERT INTO public.categories (id, name, product_type)");
        self.line("VALUES");

        let rows: Vec<String> = CATEGORIES
            .iter()
            .map(|category| {
                format!(
                    "  ({}, {}, {})",
                    quote(&category.id.to_string()),
                    quote(category.name),
                    quote(category.product_type.as_db_str())
                )
            })
            .collect();

        self.line(rows.join(",\n"));
        self.line("ON CONFLICT (name, product_type) DO NOTHING;");
        self.line("");
    }

    /// One INSERT for all products of a sheet. A sheet without rows gets
    /// only its banner, since an empty VALUES list is invalid SQL.
    pub fn seed_products(&mut self, table: &ProductTable, products: &[GeneratedProduct]) {
        info!("Rendering {} {} products", products.len(), table.code_prefix);

        let title = format!("PRODUCTOS – {}  ({} filas)", table.label, products.len());
        self.banner(&[title.as_str()]);

        if products.is_empty() {
            self.line("-- sin filas");
            self.line("");
            return;
        }

        self.line("INSERT INTO public.products");
        self.line(
            "  (code, name, product_type, unit_type, unit_price, supplier_id, category_id, created_by)",
        );
        self.line("VALUES");

        let supplier_lookup = format!(
            "(SELECT id FROM public.suppliers WHERE name = {})",
            quote(SUPPLIER.name)
        );
        let creator = quote(&PRODUCT_CREATOR.to_string());

        let rows: Vec<String> = products
            .iter()
            .map(|product| {
                let category_lookup = format!(
                    "(SELECT id FROM public.categories WHERE name = {} AND product_type = {})",
                    quote(product.category.name),
                    quote(product.category.product_type.as_db_str())
                );
                format!(
                    "  ({}, {}, {}, {}, {},\n   {supplier_lookup},\n   {category_lookup},\n   {creator})",
                    quote(&product.code),
                    quote(&product.name),
                    quote(product.product_type.as_db_str()),
                    quote(&product.unit),
                    product.unit_price,
                )
            })
            .collect();

        self.line(rows.join(",\n"));
        self.line("ON CONFLICT (code) DO NOTHING;");
        self.line("");
    }

    /// Zero-quantity inventory for every product present after the inserts.
    pub fn seed_inventory(&mut self) {
        self.banner(&[
            "INVENTARIO INICIAL",
            "Una fila en public.inventory por cada producto insertado",
        ]);
        self.line("INSERT INTO public.inventory (product_id, current_qty)");
        self.line("SELECT id, 0 FROM public.products");
        self.line("ON CONFLICT (product_id) DO NOTHING;");
        self.line("");
    }

    pub fn commit(&mut self) {
        self.line("COMMIT;");
    }

    /// Joins the script, newline-terminated.
    pub fn finish(self) -> String {
        let mut sql = self.lines.join("\n");
        sql.push('\n');
        sql
    }
}

impl Default for SeedScript {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, unit: &str, price: &str) -> SourceRow {
        SourceRow::from_fields(name, unit, price).unwrap()
    }

    /// Statements of the script, comments and blank lines removed.
    fn statements(sql: &str) -> Vec<String> {
        let body: Vec<&str> = sql
            .lines()
            .filter(|l| !l.trim_start().starts_with("--") && !l.trim().is_empty())
            .collect();
        body.join("\n")
            .split(';')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }

    #[test]
    fn test_single_ingredient_script() {
        let sql = render_script(&[row("Harina", "KG", "1,50")], &[]);

        assert_eq!(sql.matches("('ING-").count(), 1);
        assert!(sql.contains("('ING-0001', 'Harina', 'INGREDIENT', 'KG', 1.50,"));
        assert!(!sql.contains("'MAT-"));
        assert_eq!(sql.matches("INSERT INTO public.products").count(), 1);
        assert_eq!(sql.matches("INSERT INTO public.inventory").count(), 1);
        assert!(sql.contains("PRODUCTOS – MATERIALES  (0 filas)"));
    }

    #[test]
    fn test_section_order() {
        let sql = render_script(&[row("Harina", "KG", "1")], &[row("Caja", "", "2")]);

        let markers = [
            "BEGIN;",
            "CREATE EXTENSION IF NOT EXISTS \"uuid-ossp\";",
            "CREATE EXTENSION IF NOT EXISTS pgcrypto;",
            "INSERT INTO public.users",
            "INSERT INTO public.suppliers",
            "INSERT INTO public.categories",
            "'ING-0001'",
            "'MAT-0001'",
            "INSERT INTO public.inventory",
            "COMMIT;",
        ];
        let positions: Vec<usize> = markers
            .iter()
            .map(|m| sql.find(m).unwrap_or_else(|| panic!("missing {m}")))
            .collect();

        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(sql.starts_with(RULE));
        assert!(sql.ends_with("COMMIT;\n"));
    }

    #[test]
    fn test_every_insert_skips_conflicts() {
        let sql = render_script(&[row("Harina", "KG", "1")], &[row("Caja", "UNIDAD", "2")]);

        let expected = [
            ("INSERT INTO public.users", "ON CONFLICT (email) DO NOTHING"),
            ("INSERT INTO public.suppliers", "ON CONFLICT (name) DO NOTHING"),
            (
                "INSERT INTO public.categories",
                "ON CONFLICT (name, product_type) DO NOTHING",
            ),
            ("INSERT INTO public.products", "ON CONFLICT (code) DO NOTHING"),
            ("INSERT INTO public.inventory", "ON CONFLICT (product_id) DO NOTHING"),
        ];

        let inserts: Vec<String> = statements(&sql)
            .into_iter()
            .filter(|s| s.starts_with("INSERT"))
            .collect();
        assert_eq!(inserts.len(), 6);

        for insert in &inserts {
            let (_, clause) = expected
                .iter()
                .find(|(prefix, _)| insert.starts_with(prefix))
                .unwrap_or_else(|| panic!("unexpected insert: {insert}"));
            assert!(insert.ends_with(clause), "{insert}");
        }
    }

    #[test]
    fn test_product_rows_reference_fixed_entities() {
        let sql = render_script(&[], &[row("Bolsa", "PAQUETE", "0,05")]);

        assert!(sql.contains("('MAT-0001', 'Bolsa', 'MATERIAL', 'PAQUETE', 0.05,"));
        assert!(sql.contains("(SELECT id FROM public.suppliers WHERE name = 'Proveedor General')"));
        assert!(sql.contains(
            "(SELECT id FROM public.categories WHERE name = 'Materiales' AND product_type = 'MATERIAL')"
        ));
        assert!(sql.contains("   '11111111-1111-1111-1111-111111111111')\nON CONFLICT (code)"));
    }

    #[test]
    fn test_names_and_units_are_escaped() {
        let sql = render_script(&[row("Pan d'or", "L'unidad", "1")], &[]);

        assert!(sql.contains("'Pan d''or'"));
        assert!(sql.contains("'L''unidad'"));
    }

    #[test]
    fn test_users_hashed_by_database() {
        let sql = render_script(&[], &[]);

        assert_eq!(sql.matches("gen_salt('bf', 10)").count(), 3);
        assert!(sql.contains("crypt('SuperAdmin2026!', gen_salt('bf', 10)),"));
        assert!(sql.contains("--   admin@lovelace.edu        → SuperAdmin2026!"));
        assert!(!sql.contains("INSERT INTO public.products"));
        assert_eq!(sql.matches("INSERT INTO public.inventory").count(), 1);
    }

    #[test]
    fn test_rows_keep_multiple_products_separated() {
        let sql = render_script(
            &[row("Harina", "KG", "1"), row("Sal", "KG", "0,8")],
            &[],
        );

        assert!(sql.contains("'11111111-1111-1111-1111-111111111111'),\n  ('ING-0002', 'Sal'"));
        assert!(sql.contains("PRODUCTOS – INGREDIENTES  (2 filas)"));
    }
}

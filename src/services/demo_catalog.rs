// src/services/demo_catalog.rs

// Catálogo fixo de dados demo (escola no Quênia: taxas + uniformes + papelaria).

pub const DEMO_TENANT_SUBDOMAIN: &str = "demo";
pub const ADMIN_USERNAME: &str = "admin";
pub const INITIAL_STOCK_NOTE: &str = "Initial demo data";

#[derive(Debug, Clone, Copy)]
pub struct CategorySeed {
    pub name: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    pub display_order: i64,
}

#[derive(Debug, Clone, Copy)]
pub struct UnitSeed {
    pub name: &'static str,
    pub display_order: i64,
}

// Valores em unidades inteiras da moeda (KES)
#[derive(Debug, Clone, Copy)]
pub struct ProductSeed {
    pub sku: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub base_cost: i64,
    pub selling_price: i64,
    pub quantity: i64,
    pub category: &'static str,
    pub unit: &'static str,
    pub reorder_level: i64,
}

pub const DEMO_CATEGORIES: [CategorySeed; 5] = [
    CategorySeed { name: "Academics", icon: "book-open", color: "blue-500", display_order: 1 },
    CategorySeed { name: "Uniforms", icon: "shirt", color: "orange-500", display_order: 2 },
    CategorySeed { name: "Extra-Curricular", icon: "music", color: "purple-500", display_order: 3 },
    CategorySeed { name: "Stationery", icon: "pen-tool", color: "green-500", display_order: 4 },
    CategorySeed { name: "Boarding", icon: "home", color: "pink-500", display_order: 5 },
];

// 14 unidades essenciais para o varejo
pub const DEMO_UNITS: [UnitSeed; 14] = [
    UnitSeed { name: "pc", display_order: 1 },      // peças
    UnitSeed { name: "kg", display_order: 2 },
    UnitSeed { name: "g", display_order: 3 },
    UnitSeed { name: "l", display_order: 4 },
    UnitSeed { name: "ml", display_order: 5 },
    UnitSeed { name: "hr", display_order: 6 },      // horas
    UnitSeed { name: "box", display_order: 7 },
    UnitSeed { name: "pack", display_order: 8 },
    UnitSeed { name: "bag", display_order: 9 },
    UnitSeed { name: "dozen", display_order: 10 },
    UnitSeed { name: "set", display_order: 11 },
    UnitSeed { name: "pair", display_order: 12 },
    UnitSeed { name: "service", display_order: 13 },
    UnitSeed { name: "session", display_order: 14 },
];

pub const DEMO_PRODUCTS: [ProductSeed; 8] = [
    // Academics
    ProductSeed {
        sku: "ACAD-001",
        name: "Tuition Fee - Grade 1",
        description: "Termly tuition fee for Grade 1",
        base_cost: 0,
        selling_price: 15000,
        quantity: 1000,
        category: "Academics",
        unit: "session",
        reorder_level: 0,
    },
    ProductSeed {
        sku: "ACAD-002",
        name: "Examination Fee",
        description: "Annual internal examination fee",
        base_cost: 0,
        selling_price: 2000,
        quantity: 1000,
        category: "Academics",
        unit: "session",
        reorder_level: 0,
    },
    // Uniforms
    ProductSeed {
        sku: "UNI-001",
        name: "School Sweater (Medium)",
        description: "Branded school sweater",
        base_cost: 800,
        selling_price: 1200,
        quantity: 50,
        category: "Uniforms",
        unit: "pc",
        reorder_level: 10,
    },
    ProductSeed {
        sku: "UNI-002",
        name: "School Tie",
        description: "Official school tie",
        base_cost: 150,
        selling_price: 300,
        quantity: 100,
        category: "Uniforms",
        unit: "pc",
        reorder_level: 20,
    },
    // Extra-Curricular
    ProductSeed {
        sku: "EXT-001",
        name: "Swimming Club Membership",
        description: "Annual swimming club fee",
        base_cost: 0,
        selling_price: 3000,
        quantity: 100,
        category: "Extra-Curricular",
        unit: "session",
        reorder_level: 0,
    },
    // Stationery
    ProductSeed {
        sku: "STA-001",
        name: "Exercise Book A4 120pg",
        description: "Branded exercise book",
        base_cost: 45,
        selling_price: 70,
        quantity: 500,
        category: "Stationery",
        unit: "pc",
        reorder_level: 50,
    },
    ProductSeed {
        sku: "STA-002",
        name: "Mathematical Set",
        description: "Oxford mathematical set",
        base_cost: 250,
        selling_price: 400,
        quantity: 100,
        category: "Stationery",
        unit: "pc",
        reorder_level: 10,
    },
    // Boarding
    ProductSeed {
        sku: "BRD-001",
        name: "Boarding Fee - Term 1",
        description: "Full board accommodation",
        base_cost: 0,
        selling_price: 25000,
        quantity: 200,
        category: "Boarding",
        unit: "session",
        reorder_level: 0,
    },
];

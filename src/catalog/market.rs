use rust_decimal::Decimal;

use super::ALL;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Product {
    pub(crate) id: u32,
    pub(crate) title: &'static str,
    pub(crate) price: u32,
    pub(crate) seller: &'static str,
    pub(crate) category: &'static str,
    pub(crate) condition: &'static str,
    pub(crate) description: &'static str,
    pub(crate) location: &'static str,
    pub(crate) posted: &'static str,
}

pub(crate) const PRODUCT_CATEGORIES: &[&str] =
    &[ALL, "Clothing", "Electronics", "Sports", "Books", "Other"];

pub(crate) const PRODUCTS: &[Product] = &[
    Product {
        id: 1,
        title: "Vintage Denim Jacket",
        price: 25,
        seller: "Sarah M.",
        category: "Clothing",
        condition: "Good",
        description: "Barely worn vintage denim jacket, perfect for casual outfits",
        location: "Downtown Area",
        posted: "2 days ago",
    },
    Product {
        id: 2,
        title: "Gaming Headset",
        price: 45,
        seller: "Mike K.",
        category: "Electronics",
        condition: "Excellent",
        description: "High-quality gaming headset with noise cancellation",
        location: "Northside",
        posted: "1 day ago",
    },
    Product {
        id: 3,
        title: "Skateboard Deck",
        price: 30,
        seller: "Alex R.",
        category: "Sports",
        condition: "Good",
        description: "Custom skateboard deck, great for beginners",
        location: "Riverside Park",
        posted: "3 days ago",
    },
    Product {
        id: 4,
        title: "Math Textbooks Set",
        price: 20,
        seller: "Emma L.",
        category: "Books",
        condition: "Fair",
        description: "Complete set of high school math textbooks",
        location: "West High School",
        posted: "5 days ago",
    },
    Product {
        id: 5,
        title: "Wireless Earbuds",
        price: 35,
        seller: "Jordan P.",
        category: "Electronics",
        condition: "Excellent",
        description: "Brand new wireless earbuds, never used",
        location: "Downtown Area",
        posted: "6 hours ago",
    },
    Product {
        id: 6,
        title: "Thrift Store Sweater",
        price: 15,
        seller: "Taylor S.",
        category: "Clothing",
        condition: "Good",
        description: "Cozy vintage sweater, perfect for winter",
        location: "Eastside",
        posted: "1 week ago",
    },
];

impl Product {
    pub(crate) fn price(&self) -> Decimal {
        Decimal::from(self.price)
    }

    pub(crate) fn find(id: u32) -> Option<&'static Product> {
        PRODUCTS.iter().find(|p| p.id == id)
    }

    /// Products whose title or description contains `query` (case-insensitive),
    /// limited to `category` unless it is empty or "all".
    pub(crate) fn search(query: &str, category: &str) -> Vec<&'static Product> {
        let query = query.trim().to_lowercase();
        let any_category = category.is_empty() || category.eq_ignore_ascii_case(ALL);
        PRODUCTS
            .iter()
            .filter(|p| {
                query.is_empty()
                    || p.title.to_lowercase().contains(&query)
                    || p.description.to_lowercase().contains(&query)
            })
            .filter(|p| any_category || p.category.eq_ignore_ascii_case(category))
            .collect()
    }
}

//! Placeholder data written by the seeding operation

use super::seed::SeedData;
use crate::contract::{Customer, Invoice, InvoiceStatus, Revenue, User};
use chrono::NaiveDate;
use uuid::Uuid;

const CUSTOMERS: [(&str, &str, &str, &str); 6] = [
    (
        "d6e15727-9fe1-4961-8c5b-ea44a9bd81aa",
        "Evil Rabbit",
        "evil@rabbit.com",
        "/customers/evil-rabbit.png",
    ),
    (
        "3958dc9e-712f-4377-85e9-fec4b6a6442a",
        "Delba de Oliveira",
        "delba@oliveira.com",
        "/customers/delba-de-oliveira.png",
    ),
    (
        "3958dc9e-742f-4377-85e9-fec4b6a6442a",
        "Lee Robinson",
        "lee@robinson.com",
        "/customers/lee-robinson.png",
    ),
    (
        "76d65c26-f784-44a2-ac19-586678f7c2f2",
        "Michael Novotny",
        "michael@novotny.com",
        "/customers/michael-novotny.png",
    ),
    (
        "CC27C14A-0ACF-4F4A-A6C9-D45682C144B9",
        "Amy Burns",
        "amy@burns.com",
        "/customers/amy-burns.png",
    ),
    (
        "13D07535-C59E-4157-A011-F8D2EF4E0CBB",
        "Balazs Orban",
        "balazs@orban.com",
        "/customers/balazs-orban.png",
    ),
];

/// (customer index, cents, status, (year, month, day))
const INVOICES: [(usize, i32, InvoiceStatus, (i32, u32, u32)); 13] = [
    (0, 15795, InvoiceStatus::Pending, (2022, 12, 6)),
    (1, 20348, InvoiceStatus::Pending, (2022, 11, 14)),
    (4, 3040, InvoiceStatus::Paid, (2022, 10, 29)),
    (3, 44800, InvoiceStatus::Paid, (2023, 9, 10)),
    (5, 34577, InvoiceStatus::Pending, (2023, 8, 5)),
    (2, 54246, InvoiceStatus::Pending, (2023, 7, 16)),
    (0, 666, InvoiceStatus::Pending, (2023, 6, 27)),
    (3, 32545, InvoiceStatus::Paid, (2023, 6, 9)),
    (4, 1250, InvoiceStatus::Paid, (2023, 6, 17)),
    (5, 8546, InvoiceStatus::Paid, (2023, 6, 7)),
    (1, 500, InvoiceStatus::Paid, (2023, 8, 19)),
    (5, 8945, InvoiceStatus::Paid, (2023, 6, 3)),
    (2, 1000, InvoiceStatus::Paid, (2022, 6, 5)),
];

const REVENUE: [(&str, i32); 12] = [
    ("Jan", 2000),
    ("Feb", 1800),
    ("Mar", 2200),
    ("Apr", 2500),
    ("May", 2300),
    ("Jun", 3200),
    ("Jul", 3500),
    ("Aug", 3700),
    ("Sep", 2500),
    ("Oct", 2800),
    ("Nov", 3000),
    ("Dec", 4800),
];

/// Build the placeholder data set.
///
/// Invoices get fresh ids on every call.
pub fn placeholder_data() -> anyhow::Result<SeedData> {
    let users = vec![User {
        id: "410544b2-4001-4271-9855-fec4b6a6442a".to_string(),
        name: "User".to_string(),
        email: "user@nextmail.com".to_string(),
        password: "123456".to_string(),
    }];

    let customers: Vec<Customer> = CUSTOMERS
        .iter()
        .map(|(id, name, email, image_url)| Customer {
            id: id.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            image_url: image_url.to_string(),
        })
        .collect();

    let invoices = INVOICES
        .iter()
        .map(|&(customer, amount, status, (year, month, day))| {
            let date = NaiveDate::from_ymd_opt(year, month, day)
                .ok_or_else(|| anyhow::anyhow!("invalid fixture date {}-{}-{}", year, month, day))?;
            Ok::<_, anyhow::Error>(Invoice {
                id: Uuid::new_v4().to_string(),
                customer_id: customers[customer].id.clone(),
                amount,
                status,
                date,
            })
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    let revenue = REVENUE
        .iter()
        .map(|(month, revenue)| Revenue {
            month: month.to_string(),
            revenue: *revenue,
        })
        .collect();

    Ok(SeedData {
        users,
        customers,
        invoices,
        revenue,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invoices_reference_known_customers() {
        let data = placeholder_data().unwrap();
        for invoice in &data.invoices {
            assert!(data.customers.iter().any(|c| c.id == invoice.customer_id));
        }
    }

    #[test]
    fn invoice_ids_are_fresh_per_call() {
        let first = placeholder_data().unwrap();
        let second = placeholder_data().unwrap();
        assert_ne!(first.invoices[0].id, second.invoices[0].id);
        assert_eq!(first.users, second.users);
        assert_eq!(first.revenue, second.revenue);
    }
}

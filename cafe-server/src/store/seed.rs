//! 示例数据填充
//!
//! 进程启动时调用一次 [`ensure_seeded`]：咖啡馆集合为空则写入固定的
//! 5 家咖啡馆，员工集合为空则写入固定的 3 名员工（分别挂在第一家和
//! 最后一家咖啡馆下）。幂等：集合非空时不做任何事。

use chrono::NaiveDate;
use uuid::Uuid;

use crate::idgen::generate_employee_id;
use crate::models::{Cafe, Employee, Gender};
use crate::store::MemoryStore;
use crate::utils::AppResult;

/// Seed the store with the fixed sample records if the collections are empty
pub fn ensure_seeded(store: &MemoryStore) -> AppResult<()> {
    if store.cafes.is_empty() {
        for cafe in sample_cafes() {
            store.cafes.insert(cafe);
        }
        tracing::info!(count = store.cafes.len(), "Seeded cafes");
    }

    if store.employees.is_empty() {
        let cafes = store.cafes.list();
        let first = cafes.first().map(|c| c.id);
        let last = cafes.last().map(|c| c.id);
        for employee in sample_employees(first, last)? {
            store.employees.insert(employee);
        }
        tracing::info!(count = store.employees.len(), "Seeded employees");
    }

    Ok(())
}

fn sample_cafes() -> Vec<Cafe> {
    vec![
        Cafe {
            id: Uuid::new_v4(),
            name: "Cafe Mocha".into(),
            description: "A cozy cafe serving coffee and pastries in a relaxing ambiance.".into(),
            location: "Singapore".into(),
            logo: "https://th.bing.com/th/id/OIP.GWKrFKagojjcEaiRsjoIggAAAA?rs=1&pid=ImgDetMain&cb=idpwebpc2".into(),
        },
        Cafe {
            id: Uuid::new_v4(),
            name: "Tiong Bahru Bakery".into(),
            description: "Famous for its artisanal French pastries and fresh bakes.".into(),
            location: "Singapore".into(),
            logo: String::new(),
        },
        Cafe {
            id: Uuid::new_v4(),
            name: "Common Man Coffee Roasters".into(),
            description: "Specialty coffee roaster with brunch and quality beans sourced worldwide.".into(),
            location: "Singapore".into(),
            logo: "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAACAAAAAgCAMAAABEpIrGAAAAZlBMVEVVeFZXe1iSqIWdsY5nh2SnuJWLo4CFnnt4lHFVeldxkG1+l3b//+jZ3bv49NJbgFzk5cT5+drp6cfw7sxXfVmitZLz89P//t3g48D//+HK07B/m3e1w6BReFTN1bK6x6T//+xrjGgH92QmAAABAUlEQVR4AZ3TBW4sIQAA0Mfo2te63v9cdffVsSbEGi3pKPJwCIQvd4MqhlbGgrnvwVirFnQKBG/+CJZquaBNAME/dMpYbab0qjbxYaT0mAgqrQbARu+/4N7/H4I59tzb1UgHpaU3dezkBAOGRDBWmLkTbBs8+quPTTJKBsFfhQfbrk2Upq78MdfbMk8AQe7IEEFrjqnb2PHCnZAAxnYFrRuHnuw4t6N0b2PX0msS+KMR8KEzMbelttDItUIyaFEaW3qJ4Mpvv10q0gHm9nyYR/CqUHjUpQNlHOTEeQSDW5W1JgFQigdHpfZoavDPnZVTz0IKiJ/cYJBrUMktkcs034NPYOfE6/22cbEAAAAASUVORK5CYII=".into(),
        },
        Cafe {
            id: Uuid::new_v4(),
            name: "Atlas Coffeehouse".into(),
            description: "Trendy cafe with rich coffee and fusion brunch dishes.".into(),
            location: "Singapore".into(),
            logo: String::new(),
        },
        Cafe {
            id: Uuid::new_v4(),
            name: "The Populus Coffee & Food Co.".into(),
            description: "Modern cafe with specialty coffee and innovative food menu.".into(),
            location: "Singapore".into(),
            logo: String::new(),
        },
    ]
}

fn sample_employees(
    first_cafe: Option<Uuid>,
    last_cafe: Option<Uuid>,
) -> AppResult<Vec<Employee>> {
    Ok(vec![
        Employee {
            id: generate_employee_id()?,
            name: "Teck Wu".into(),
            email_address: "teck.wu@cafemocha.com".into(),
            phone_number: "83456789".into(),
            gender: Gender::Male,
            cafe_id: first_cafe,
            employment_date: NaiveDate::from_ymd_opt(2024, 5, 5),
        },
        Employee {
            id: generate_employee_id()?,
            name: "Roy Tan".into(),
            email_address: "roy.tan@example.com".into(),
            phone_number: "83456789".into(),
            gender: Gender::Male,
            cafe_id: last_cafe,
            employment_date: NaiveDate::from_ymd_opt(2024, 3, 21),
        },
        Employee {
            id: generate_employee_id()?,
            name: "Ava Lee".into(),
            email_address: "ava.lee@example.com".into(),
            phone_number: "82345678".into(),
            gender: Gender::Female,
            cafe_id: first_cafe,
            employment_date: NaiveDate::from_ymd_opt(2024, 1, 10),
        },
    ])
}

//! Example composing SELECT / UPDATE / INSERT statements from fragments.
//!
//! Run with:
//!   cargo run --example compose -p sqlfrag

use sqlfrag::{
    Column, FragResult, Sql, Where, columns, identifier, optional, set, sql, template, try_unnest,
    values,
};

#[derive(Debug)]
struct Filters {
    status: Option<String>,
    search: Option<String>,
    include_deleted: bool,
    limit: i64,
}

#[derive(Debug)]
struct UserPatch {
    name: Option<String>,
    nickname: Option<Option<String>>,
}

fn list_users(filters: &Filters) -> Sql {
    let mut filter = Where::new();
    if let Some(status) = &filters.status {
        filter = filter.and(template!("{} = {}", identifier("u.status"), status));
    }
    if let Some(search) = &filters.search {
        filter = filter.and(template!("u.name ILIKE {}", format!("%{search}%")));
    }
    if !filters.include_deleted {
        filter = filter.and("u.deleted_at IS NULL");
    }

    let cols = columns([
        Column::from("id"),
        Column::from(("created_at", "createdAt")),
        columns(["name"]).prefix("p").into(),
        sql!("COUNT(*) OVER () AS {}", identifier("totalRows")).into(),
    ])
    .prefix("u");

    sql!(
        "SELECT {} FROM {} u JOIN {} p ON p.user_id = u.id {} LIMIT {}",
        cols,
        identifier("public.users"),
        identifier("public.profiles"),
        filter,
        filters.limit,
    )
}

fn update_user(id: i64, patch: UserPatch) -> Sql {
    // `nickname: Some(None)` clears the column; `None` leaves it alone.
    let mut q = sql!("UPDATE {} ", identifier("users"));
    q.append(set([
        ("name", optional(patch.name)),
        ("nickname", optional(patch.nickname)),
        ("updated_at", sql!("NOW()").into()),
    ]))
    .append(sql!(" WHERE id = {}", id));
    q
}

fn insert_items(rows: Vec<(i64, String)>) -> FragResult<Sql> {
    let rows = rows
        .into_iter()
        .map(|(id, name)| [sqlfrag::Value::from(id), sqlfrag::Value::from(name)]);
    Ok(sql!(
        "INSERT INTO items (id, name) SELECT * FROM {}",
        try_unnest(["INT8[]", "TEXT[]"], rows)?,
    ))
}

fn print(label: &str, q: &Sql) {
    println!("== {label}");
    println!("{q}");
    for (i, v) in q.values().iter().enumerate() {
        println!("  ${} = {v}", i + 1);
    }
}

fn main() -> FragResult<()> {
    let filters = Filters {
        status: Some("active".to_string()),
        search: Some("ali".to_string()),
        include_deleted: false,
        limit: 20,
    };
    print("list users", &list_users(&filters));

    let patch = UserPatch {
        name: None,
        nickname: Some(None),
    };
    print("update user", &update_user(7, patch));

    print(
        "insert (VALUES)",
        &sql!("INSERT INTO t (a, b) {}", values([[1, 2], [3, 4]])),
    );
    print(
        "insert (UNNEST)",
        &insert_items(vec![(1, "one".into()), (2, "two".into())])?,
    );

    let q = sql!("SELECT {} FROM t", columns(["a", "b"]).prefix("t"));
    let (text, params) = q.into_parts();
    println!("== into_parts\n{text} ({} params)", params.len());

    Ok(())
}

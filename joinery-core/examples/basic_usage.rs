use joinery_core::{
    select, update, ClauseInput, Constraint, Dialect, InsertStatement, JoinColumn, JoinColumns,
    JoinType, OrderByClause, Postgres, SqlType, Table, TableJoin, WhereClause,
};

fn main() -> joinery_core::Result<()> {
    // Schema constants: columns bound to their table and value type
    let user_id = SqlType::INT
        .create_column("users", "id")
        .constraint(Constraint::NotNull)
        .constraint(Constraint::PrimaryKey);
    let user_name = SqlType::varchar(255)
        .create_column("users", "name")
        .constraint(Constraint::NotNull);
    let user_bio = SqlType::TEXT.create_column("users", "bio");

    let users = Table::new(
        "users",
        vec![
            user_id.def().clone(),
            user_name.def().clone(),
            user_bio.def().clone(),
        ],
    )
    .if_not_exists();

    let profile_user_id = SqlType::INT.create_column("profiles", "user_id");
    let profiles = Table::new("profiles", vec![profile_user_id.def().clone()]);

    println!("CREATE: {}", Postgres.create_table(&users));

    // SELECT with a typed WHERE chain and an ordering
    let adults = select(&users)
        .all_columns()
        .where_clause(
            WhereClause::builder()
                .greater_than(ClauseInput::column(&user_id), 100)
                .and()
                .not_equal(ClauseInput::column(&user_name), "admin"),
        )
        .order_by(OrderByClause::builder().asc().column(&user_name))
        .build();
    println!("SELECT: {}", Postgres.select_statement(&adults));

    // SELECT joined against another table
    let joined = select(&users)
        .column(&user_id)
        .column(&user_name)
        .join(TableJoin::new(
            &profiles,
            JoinType::Left,
            JoinColumns::builder()
                .add(
                    JoinColumn::new(&users, &user_id),
                    JoinColumn::new(&profiles, &profile_user_id),
                    JoinType::Left,
                )
                .build()?,
        ))
        .build();
    println!("JOINED: {}", Postgres.select_statement(&joined));

    // INSERT with placeholders for the execution layer to bind
    let add_user = InsertStatement::builder(&users)
        .column(&user_id)
        .column(&user_name)
        .column(&user_bio)
        .build()?;
    println!("INSERT: {}", Postgres.insert_statement(&add_user));

    // UPDATE with SET targets and a typed WHERE
    let rename = update(&users)
        .set(&user_name)
        .where_clause(WhereClause::builder().equal(ClauseInput::column(&user_id), 1))
        .build()?;
    println!("UPDATE: {}", Postgres.update_statement(&rename));

    Ok(())
}

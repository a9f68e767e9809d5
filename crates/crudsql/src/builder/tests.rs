use super::*;
use crate::error::BuilderResult;
use crate::params;
use crate::value::Value;

fn placeholder_count(sql: &str) -> usize {
    sql.matches('?').count()
}

// ==================== SELECT ====================

#[test]
fn test_select_from() {
    let mut qb = select();
    qb.select_from("users");
    assert_eq!(qb.query(), "SELECT * FROM users");
    assert!(qb.parameters().is_empty());
}

#[test]
fn test_select_columns() {
    let mut qb = select();
    qb.select(["id", "username", "email"]).from("users");
    assert_eq!(qb.query(), "SELECT (id, username, email) FROM users");
}

#[test]
fn test_select_single_column_keeps_parens() {
    let mut qb = select();
    qb.select(["id"]).from("users");
    assert_eq!(qb.query(), "SELECT (id) FROM users");
}

#[test]
fn test_select_where_eq() {
    let mut qb = select();
    qb.select_from("users").where_eq("status", "active");
    assert_eq!(qb.query(), "SELECT * FROM users WHERE status = ?");
    assert_eq!(qb.parameters(), &[Value::Text("active".to_string())]);
}

#[test]
fn test_select_and_or_chain() {
    let mut qb = select();
    qb.select_from("users")
        .where_eq("status", "active")
        .and_gt("age", 18)
        .or_eq("role", "admin");
    assert_eq!(
        qb.query(),
        "SELECT * FROM users WHERE status = ? AND age > ? OR role = ?"
    );
    assert_eq!(
        qb.parameters(),
        &[
            Value::Text("active".to_string()),
            Value::Int(18),
            Value::Text("admin".to_string()),
        ]
    );
}

#[test]
fn test_select_where_in() {
    let mut qb = select();
    qb.select_from("users").where_in("id", [1, 2, 3]);
    assert_eq!(qb.query(), "SELECT * FROM users WHERE id IN (?, ?, ?)");
    assert_eq!(
        qb.parameters(),
        &[Value::Int(1), Value::Int(2), Value::Int(3)]
    );
}

#[test]
fn test_select_where_not_in() {
    let mut qb = select();
    qb.select_from("users").where_not_in("id", [1, 2]);
    assert_eq!(qb.query(), "SELECT * FROM users WHERE id NOT IN (?, ?)");
}

#[test]
fn test_select_in_empty_list_is_noop() {
    let mut qb = select();
    qb.select_from("users").where_in("id", Vec::<i32>::new());
    assert_eq!(qb.query(), "SELECT * FROM users");
    assert!(qb.parameters().is_empty());
}

#[test]
fn test_select_between() {
    let mut qb = select();
    qb.select_from("users").where_between("age", 18, 30);
    assert_eq!(qb.query(), "SELECT * FROM users WHERE age BETWEEN ? AND ?");
    assert_eq!(qb.parameters(), &[Value::Int(18), Value::Int(30)]);
}

#[test]
fn test_select_between_absent_bound_is_noop() {
    let mut qb = select();
    qb.select_from("users")
        .where_between("age", 18, None::<i32>);
    assert_eq!(qb.query(), "SELECT * FROM users");
    assert!(qb.parameters().is_empty());
}

#[test]
fn test_select_null_checks() {
    let mut qb = select();
    qb.select_from("users")
        .where_is_null("deleted_at")
        .and_is_not_null("email");
    assert_eq!(
        qb.query(),
        "SELECT * FROM users WHERE deleted_at IS NULL AND email IS NOT NULL"
    );
    assert!(qb.parameters().is_empty());
}

#[test]
fn test_select_like() {
    let mut qb = select();
    qb.select_from("users").where_like("name", "%ali%");
    assert_eq!(qb.query(), "SELECT * FROM users WHERE name LIKE ?");
}

#[test]
fn test_select_join_on() {
    let mut qb = select();
    qb.select_from("users")
        .left_join("orders")
        .on("users.id", "orders.user_id");
    assert_eq!(
        qb.query(),
        "SELECT * FROM users LEFT JOIN orders ON users.id = orders.user_id"
    );
}

#[test]
fn test_select_order_by() {
    let mut qb = select();
    qb.select_from("users")
        .where_eq("status", "active")
        .order_by("created_at", Order::Desc);
    assert_eq!(
        qb.query(),
        "SELECT * FROM users WHERE status = ? ORDER BY created_at DESC"
    );
}

#[test]
fn test_select_raw_with_suffix_operators() {
    let mut qb = select();
    qb.select_from("users")
        .where_raw("age")
        .gte(18)
        .and_raw("score")
        .lt(100);
    assert_eq!(
        qb.query(),
        "SELECT * FROM users WHERE age >= ? AND score < ?"
    );
    assert_eq!(qb.parameters(), &[Value::Int(18), Value::Int(100)]);
}

#[test]
fn test_select_raw_blank_fragment_is_noop() {
    let mut qb = select();
    qb.select_from("users").where_raw("   ");
    assert_eq!(qb.query(), "SELECT * FROM users");
}

#[test]
fn test_select_blank_column_is_noop() {
    let mut qb = select();
    qb.select_from("users").where_eq("", 1).and_eq("  ", 2);
    assert_eq!(qb.query(), "SELECT * FROM users");
    assert!(qb.parameters().is_empty());
}

#[test]
fn test_select_absent_value_is_noop() {
    let mut qb = select();
    qb.select_from("users")
        .where_eq("id", None::<i64>)
        .and_eq("name", "")
        .or_eq("nick", "   ");
    assert_eq!(qb.query(), "SELECT * FROM users");
    assert!(qb.parameters().is_empty());
}

#[test]
fn test_select_zero_and_false_are_not_absent() {
    let mut qb = select();
    qb.select_from("users")
        .where_eq("count", 0)
        .and_eq("active", false);
    assert_eq!(qb.query(), "SELECT * FROM users WHERE count = ? AND active = ?");
    assert_eq!(qb.parameters(), &[Value::Int(0), Value::Bool(false)]);
}

#[test]
fn test_select_noop_leaves_builder_byte_identical() {
    let mut qb = select();
    qb.select_from("users").where_eq("status", "active");
    let before_sql = qb.query().to_string();
    let before_len = qb.parameters().len();

    qb.and_eq("", 1)
        .and_eq("age", None::<i32>)
        .or_eq("name", "  ")
        .where_in("id", Vec::<i32>::new());

    assert_eq!(qb.query(), before_sql);
    assert_eq!(qb.parameters().len(), before_len);
}

// ==================== INSERT ====================

#[test]
fn test_insert_values() {
    let mut qb = insert();
    qb.values("users", params!["Charlie", 35, "male"]);
    assert_eq!(qb.query(), "INSERT INTO users VALUES (?, ?, ?)");
    assert_eq!(
        qb.parameters(),
        &[
            Value::Text("Charlie".to_string()),
            Value::Int(35),
            Value::Text("male".to_string()),
        ]
    );
}

#[test]
fn test_insert_columns_and_values() {
    let mut qb = insert();
    qb.columns_and_values("users", [("name", Value::from("Bob")), ("age", Value::from(40))]);
    assert_eq!(qb.query(), "INSERT INTO users (name, age) VALUES (?, ?)");
    assert_eq!(
        qb.parameters(),
        &[Value::Text("Bob".to_string()), Value::Int(40)]
    );
}

#[test]
fn test_insert_columns_and_values_empty_map() {
    let mut qb = insert();
    qb.columns_and_values("users", Vec::<(&str, i32)>::new());
    assert_eq!(qb.query(), "INSERT INTO users () VALUES ()");
    assert!(qb.parameters().is_empty());
}

#[test]
fn test_insert_multi_values() -> BuilderResult<()> {
    let mut qb = insert();
    qb.multi_values("users", vec![params![1, "Ann"], params![2, "Ben"]])?;
    assert_eq!(qb.query(), "INSERT INTO users VALUES (?, ?), (?, ?)");
    assert_eq!(qb.parameters().len(), 4);
    Ok(())
}

#[test]
fn test_insert_multi_values_empty_faults() {
    let mut qb = insert();
    let err = qb
        .multi_values("users", Vec::<Vec<Value>>::new())
        .unwrap_err();
    assert!(err.is_invalid_argument());
    // The fault leaves the builder untouched.
    assert_eq!(qb.query(), "");
    assert!(qb.parameters().is_empty());
}

#[test]
fn test_insert_columns_and_multi_values() -> BuilderResult<()> {
    let mut qb = insert();
    qb.columns_and_multi_values(
        "users",
        vec![
            vec![("name", Value::from("Ann")), ("age", Value::from(21))],
            vec![("name", Value::from("Ben")), ("age", Value::from(22))],
        ],
    )?;
    assert_eq!(
        qb.query(),
        "INSERT INTO users (name, age) VALUES (?, ?), (?, ?)"
    );
    assert_eq!(qb.parameters().len(), 4);
    Ok(())
}

#[test]
fn test_insert_columns_and_multi_values_empty_faults() {
    let mut qb = insert();
    let err = qb
        .columns_and_multi_values("users", Vec::<Vec<(&str, i32)>>::new())
        .unwrap_err();
    assert!(err.is_invalid_argument());
    assert_eq!(qb.query(), "");
}

// ==================== UPDATE ====================

#[test]
fn test_update_set_where() -> BuilderResult<()> {
    let mut qb = update();
    qb.update_table("users")?
        .set_values([("age", 15)])?
        .where_eq("user_id", 1);
    assert_eq!(qb.query(), "UPDATE users SET age = ? WHERE user_id = ?");
    assert_eq!(qb.parameters(), &[Value::Int(15), Value::Int(1)]);
    Ok(())
}

#[test]
fn test_update_set_multiple_columns() -> BuilderResult<()> {
    let mut qb = update();
    qb.update_table("users")?
        .set_values([("name", Value::from("Ann")), ("age", Value::from(30))])?
        .where_eq("id", 7);
    assert_eq!(
        qb.query(),
        "UPDATE users SET name = ?, age = ? WHERE id = ?"
    );
    assert_eq!(qb.parameters().len(), 3);
    Ok(())
}

#[test]
fn test_update_blank_table_faults() {
    let mut qb = update();
    let err = qb.update_table("  ").unwrap_err();
    assert!(err.is_invalid_argument());
    assert_eq!(qb.query(), "");
}

#[test]
fn test_update_empty_set_values_faults() -> BuilderResult<()> {
    let mut qb = update();
    qb.update_table("users")?;
    let err = qb
        .set_values(Vec::<(&str, i32)>::new())
        .unwrap_err();
    assert!(err.is_invalid_argument());
    assert_eq!(qb.query(), "UPDATE users");
    Ok(())
}

#[test]
fn test_update_join() -> BuilderResult<()> {
    let mut qb = update();
    qb.update_table("users")?
        .left_join("orders", "users.id", "orders.user_id")?
        .set_values([("status", "done")])?;
    assert_eq!(
        qb.query(),
        "UPDATE users LEFT JOIN orders ON users.id = orders.user_id SET status = ?"
    );
    Ok(())
}

#[test]
fn test_update_join_blank_operand_faults() -> BuilderResult<()> {
    let mut qb = update();
    qb.update_table("users")?;
    let err = qb.join("orders", "", "orders.user_id").unwrap_err();
    assert!(err.is_invalid_argument());
    assert_eq!(qb.query(), "UPDATE users");
    Ok(())
}

#[test]
fn test_update_case_with_bound_branches() -> BuilderResult<()> {
    let mut qb = update();
    qb.update_table("users")?
        .set_case("level")?
        .when("score")?
        .gte(90)
        .then("gold")?
        .when("score")?
        .gte(60)
        .then("silver")?
        .end_case("bronze")?
        .where_is_not_null("score");
    assert_eq!(
        qb.query(),
        "UPDATE users SET level = CASE WHEN score >= ? THEN ? WHEN score >= ? THEN ? ELSE ? END WHERE score IS NOT NULL"
    );
    assert_eq!(
        qb.parameters(),
        &[
            Value::Int(90),
            Value::Text("gold".to_string()),
            Value::Int(60),
            Value::Text("silver".to_string()),
            Value::Text("bronze".to_string()),
        ]
    );
    Ok(())
}

#[test]
fn test_update_case_with_column_arithmetic() -> BuilderResult<()> {
    let mut qb = update();
    qb.update_table("products")?
        .set_case("price")?
        .when("category")?
        .eq("book")
        .then_column("price")?
        .multiply(2)
        .end_case(0)?
        .where_gt("price", 0);
    assert_eq!(
        qb.query(),
        "UPDATE products SET price = CASE WHEN category = ? THEN price * ? ELSE ? END WHERE price > ?"
    );
    assert_eq!(qb.parameters().len(), 4);
    Ok(())
}

#[test]
fn test_update_when_outside_case_faults() -> BuilderResult<()> {
    let mut qb = update();
    qb.update_table("users")?;
    let err = qb.when("score").unwrap_err();
    assert!(err.is_illegal_state());
    Ok(())
}

#[test]
fn test_update_then_outside_case_faults() {
    let mut qb = update();
    assert!(qb.then(1).unwrap_err().is_illegal_state());
    assert!(qb.then_column("price").unwrap_err().is_illegal_state());
    assert!(qb.end_case(0).unwrap_err().is_illegal_state());
}

#[test]
fn test_update_end_case_closes_the_protocol() -> BuilderResult<()> {
    let mut qb = update();
    qb.update_table("users")?
        .set_case("level")?
        .when("score")?
        .gte(90)
        .then(1)?
        .end_case(0)?;
    // Once closed, the CASE-only methods fault again.
    assert!(qb.when("score").unwrap_err().is_illegal_state());
    Ok(())
}

#[test]
fn test_update_condition_chain() -> BuilderResult<()> {
    let mut qb = update();
    qb.update_table("users")?
        .set_values([("active", false)])?
        .where_gte("age", 18)
        .and_lt("age", 65)
        .or_eq("role", "admin");
    assert_eq!(
        qb.query(),
        "UPDATE users SET active = ? WHERE age >= ? AND age < ? OR role = ?"
    );
    Ok(())
}

#[test]
fn test_update_where_in_and_between() -> BuilderResult<()> {
    let mut qb = update();
    qb.update_table("users")?
        .set_values([("flag", 1)])?
        .where_in("id", [1, 2])
        .where_between("age", 20, 30);
    assert_eq!(
        qb.query(),
        "UPDATE users SET flag = ? WHERE id IN (?, ?) WHERE age BETWEEN ? AND ?"
    );
    assert_eq!(qb.parameters().len(), 5);
    Ok(())
}

// ==================== DELETE ====================

#[test]
fn test_delete_where_eq() -> BuilderResult<()> {
    let mut qb = delete();
    qb.delete_from("users")?.where_eq("id", 1)?;
    assert_eq!(qb.query(), "DELETE FROM users WHERE id = ?");
    assert_eq!(qb.parameters(), &[Value::Int(1)]);
    Ok(())
}

#[test]
fn test_delete_absent_value_is_noop() -> BuilderResult<()> {
    let mut qb = delete();
    qb.delete_from("users")?.where_eq("id", None::<i64>)?;
    assert_eq!(qb.query(), "DELETE FROM users");
    assert!(qb.parameters().is_empty());
    Ok(())
}

#[test]
fn test_delete_condition_before_table_faults() {
    let mut qb = delete();
    let err = qb.where_eq("id", 1).unwrap_err();
    assert!(err.is_illegal_state());
    assert_eq!(qb.query(), "");
    assert!(qb.parameters().is_empty());
}

#[test]
fn test_delete_blank_table_faults() {
    let mut qb = delete();
    assert!(qb.delete_from("").unwrap_err().is_invalid_argument());
    // Still locked afterwards.
    assert!(qb.where_eq("id", 1).unwrap_err().is_illegal_state());
}

#[test]
fn test_delete_table_check_precedes_blank_noop() {
    // A call that would be a silent no-op after delete_from still faults
    // before it.
    let mut qb = delete();
    assert!(qb.where_eq("", None::<i32>).unwrap_err().is_illegal_state());
}

#[test]
fn test_delete_chain() -> BuilderResult<()> {
    let mut qb = delete();
    qb.delete_from("sessions")?
        .where_lt("expires_at", "2020-01-01")?
        .or_is_null("user_id")?
        .and_eq("revoked", true)?;
    assert_eq!(
        qb.query(),
        "DELETE FROM sessions WHERE expires_at < ? OR user_id IS NULL AND revoked = ?"
    );
    assert_eq!(qb.parameters().len(), 2);
    Ok(())
}

#[test]
fn test_delete_where_in_and_between() -> BuilderResult<()> {
    let mut qb = delete();
    qb.delete_from("users")?
        .where_in("id", [4, 5, 6])?
        .where_between("age", 10, 20)?;
    assert_eq!(
        qb.query(),
        "DELETE FROM users WHERE id IN (?, ?, ?) WHERE age BETWEEN ? AND ?"
    );
    assert_eq!(qb.parameters().len(), 5);
    Ok(())
}

// ==================== Cross-cutting properties ====================

#[test]
fn test_placeholder_parameter_parity() -> BuilderResult<()> {
    let mut qb = select();
    qb.select_from("users")
        .where_eq("a", 1)
        .and_gt("b", 2)
        .or_like("c", "%x%")
        .where_in("d", [3, 4])
        .where_between("e", 5, 6)
        .and_is_null("f");
    assert_eq!(placeholder_count(qb.query()), qb.parameters().len());

    let mut ub = update();
    ub.update_table("users")?
        .set_values([("x", 1), ("y", 2)])?
        .where_eq("id", 3);
    assert_eq!(placeholder_count(ub.query()), ub.parameters().len());

    let mut db = delete();
    db.delete_from("users")?.where_in("id", [1, 2, 3])?;
    assert_eq!(placeholder_count(db.query()), db.parameters().len());

    let mut ib = insert();
    ib.values("users", params![1, "a", true]);
    assert_eq!(placeholder_count(ib.query()), ib.parameters().len());
    Ok(())
}

#[test]
fn test_parameter_order_matches_placeholders() -> BuilderResult<()> {
    let mut qb = update();
    qb.update_table("users")?
        .set_values([("a", 10), ("b", 20)])?
        .where_eq("c", 30)
        .and_eq("d", 40);
    assert_eq!(
        qb.parameters(),
        &[
            Value::Int(10),
            Value::Int(20),
            Value::Int(30),
            Value::Int(40),
        ]
    );
    Ok(())
}

#[test]
fn test_terminal_reads_are_stable() {
    let mut qb = select();
    qb.select_from("users").where_eq("id", 1);
    let first = qb.query().to_string();
    let second = qb.query().to_string();
    assert_eq!(first, second);
    assert_eq!(qb.parameters().len(), 1);
    assert_eq!(qb.parameters().len(), 1);
}

#[test]
fn test_mixed_value_types_pass_through_unchanged() {
    let id = uuid::Uuid::nil();
    let mut qb = select();
    qb.select_from("events")
        .where_eq("id", id)
        .and_eq("payload", serde_json::json!({"k": 1}));
    assert_eq!(
        qb.query(),
        "SELECT * FROM events WHERE id = ? AND payload = ?"
    );
    assert_eq!(
        qb.parameters(),
        &[Value::Uuid(id), Value::Json(serde_json::json!({"k": 1}))]
    );
}

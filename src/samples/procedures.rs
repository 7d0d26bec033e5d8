//! PL/SQL walkthrough over the dept/emp schema: IN and OUT binds, array
//! binding, a packaged procedure call, and a REF CURSOR listing.
//!
//! The dept and emp tables and the emp_pkg package are part of the
//! quickstart sample schema and are expected to exist.

use chrono::{Local, NaiveTime};
use log::{debug, info};

use crate::driver::{Bind, Connection, Params, SqlType, SqlValue};
use crate::error::{Error, Result};
use crate::samples::scalar_i64;

/// Name shown in the usage text.
pub const NAME: &str = "procedures";

const ADD_DEPARTMENT_BLOCK: &str = r#"
  declare
    v_deptno dept.deptno%TYPE;
    v_dname  dept.dname%TYPE;
    v_loc    dept.loc%TYPE;
  begin
    v_deptno := :1;
    v_dname  := :2;
    v_loc    := :3;
    insert into dept values(v_deptno, v_dname, v_loc);
  end;
"#;

const SELECT_PRESIDENT_BLOCK: &str = r#"
  begin
    select empno, sal
    into :1, :2
    from emp
    where mgr is null
    and rownum < 2;
  end;
"#;

const INSERT_MANAGER_STMT: &str = "insert into emp \
  (empno, ename, job, mgr, hiredate, sal, comm, deptno) \
  values (:1, :2, 'MANAGER', :3, sysdate, :4, null, :5)";

const INSERT_EMPLOYEES_STMT: &str = "insert into emp \
  (empno, ename, job, mgr, hiredate, sal, comm, deptno) \
  values (:1, :2, :3, :4, :5, :6, :7, :8)";

const GIVE_PAY_RAISE_BLOCK: &str =
    "begin emp_pkg.givePayRaise(:numEmps, :empName, :errCode, :errText); end;";

const OPEN_EMP_CURSOR_BLOCK: &str = r#"
  begin
    open :emp_cur for
    select empno, ename, job, mgr, hiredate, sal, comm, deptno
    from emp
    where deptno = :dept_no;
  end;
"#;

/// Run the dept/emp walkthrough.
pub async fn run<C: Connection>(conn: &mut C) -> Result<()> {
    info!("Start Test");

    // Highest keys so far, used to keep new rows unique.
    let emp_pk = max_pk(conn, "EMP", "EMPNO").await?;
    debug!("emp_pk = {emp_pk}");
    let dept_pk = max_pk(conn, "DEPT", "DEPTNO").await?;
    debug!("dept_pk = {dept_pk}");

    let dept_no = add_new_department(conn, dept_pk, "IT", "HOUSTON").await?;
    let mgr_no = add_new_manager(conn, emp_pk, "ITMGR", dept_no).await?;

    let num_of_emps = 10;
    let emp_basic_salary = 2000.0;
    add_employees(conn, num_of_emps, mgr_no, dept_no, mgr_no, emp_basic_salary).await?;

    give_pay_raise(conn).await?;
    show_department_emps(conn, dept_no).await?;

    info!("Test finished");
    Ok(())
}

/// Highest value in a table's primary key column, 0 for an empty table.
async fn max_pk<C: Connection>(conn: &mut C, table: &str, pk_column: &str) -> Result<i64> {
    let sql = format!("select max({pk_column}) maxno from {table}");
    let result = conn.execute(&sql, Params::None).await?;
    Ok(scalar_i64(&result).unwrap_or(0))
}

/// Add a department through a PL/SQL block with IN binds.
async fn add_new_department<C: Connection>(
    conn: &mut C,
    dept_pk: i64,
    dept_name: &str,
    dept_location: &str,
) -> Result<i64> {
    let dept_no = dept_pk + 1;
    conn.execute(
        ADD_DEPARTMENT_BLOCK,
        Params::Positional(vec![
            Bind::In(SqlValue::from(dept_no)),
            Bind::In(SqlValue::from(dept_name)),
            Bind::In(SqlValue::from(dept_location)),
        ]),
    )
    .await?;
    debug!("New department added: deptno = {dept_no}");
    Ok(dept_no)
}

/// Add a manager reporting to the president, paid half the president's
/// salary. Uses a PL/SQL block with OUT binds to find the president first.
async fn add_new_manager<C: Connection>(
    conn: &mut C,
    emp_pk: i64,
    emp_name: &str,
    dept_no: i64,
) -> Result<i64> {
    let mgr_no = emp_pk + 10;

    // The president reports to no one, so the mgr column is null.
    let result = conn
        .execute(
            SELECT_PRESIDENT_BLOCK,
            Params::Positional(vec![Bind::Out(SqlType::Number), Bind::Out(SqlType::Number)]),
        )
        .await?;
    let president_id = result
        .outs
        .first()
        .and_then(SqlValue::to_i64)
        .ok_or_else(|| Error::type_conversion("expected the president's empno"))?;
    let president_sal = result
        .outs
        .get(1)
        .and_then(SqlValue::to_f64)
        .ok_or_else(|| Error::type_conversion("expected the president's salary"))?;

    let salary = (president_sal / 2.0).round();
    debug!(
        "add_new_manager --> inserting values = {mgr_no}, {emp_name}, {president_id}, {salary}, {dept_no}"
    );
    conn.execute(
        INSERT_MANAGER_STMT,
        Params::Positional(vec![
            Bind::In(SqlValue::from(mgr_no)),
            Bind::In(SqlValue::from(emp_name)),
            Bind::In(SqlValue::from(president_id)),
            Bind::In(SqlValue::from(salary)),
            Bind::In(SqlValue::from(dept_no)),
        ]),
    )
    .await?;
    Ok(mgr_no)
}

/// Add `num_of_emps` developers to the department with one array-bound
/// insert.
async fn add_employees<C: Connection>(
    conn: &mut C,
    num_of_emps: i64,
    emp_pk: i64,
    dept_no: i64,
    mgr_id: i64,
    base_salary: f64,
) -> Result<()> {
    let hire_date = Local::now().date_naive().and_time(NaiveTime::MIN);
    let batch: Vec<Vec<SqlValue>> = (1..=num_of_emps)
        .map(|emp| {
            vec![
                SqlValue::from(emp_pk + emp),
                SqlValue::from(format!("DVLPR{emp}")),
                SqlValue::from("DEVELOPER"),
                SqlValue::from(mgr_id),
                SqlValue::from(hire_date),
                SqlValue::from(base_salary),
                SqlValue::Null,
                SqlValue::from(dept_no),
            ]
        })
        .collect();

    conn.execute_many(INSERT_EMPLOYEES_STMT, batch).await?;
    debug!("New employees added to department {dept_no}");
    Ok(())
}

/// Let emp_pkg.givePayRaise pick one of the lowest paid employees and give
/// them a 10% raise. The procedure reports failures through its OUT binds.
async fn give_pay_raise<C: Connection>(conn: &mut C) -> Result<()> {
    let num_emps = 10;
    let result = conn
        .execute(
            GIVE_PAY_RAISE_BLOCK,
            Params::Named(vec![
                ("numEmps".to_string(), Bind::In(SqlValue::from(num_emps))),
                ("empName".to_string(), Bind::Out(SqlType::Varchar2)),
                ("errCode".to_string(), Bind::Out(SqlType::Number)),
                ("errText".to_string(), Bind::Out(SqlType::Varchar2)),
            ]),
        )
        .await?;

    match result.outs.get(1).and_then(SqlValue::to_i64) {
        Some(0) => {
            let name = result.outs.first().map(ToString::to_string).unwrap_or_default();
            info!("The employee who got the 10% pay raise was {name}");
            Ok(())
        }
        code => {
            let text = result
                .outs
                .get(2)
                .and_then(SqlValue::as_str)
                .unwrap_or_default();
            Err(Error::database(
                code.and_then(|c| u32::try_from(c).ok()).unwrap_or(0),
                format!("emp_pkg.givePayRaise: {text}"),
            ))
        }
    }
}

/// List the employees of one department through a REF CURSOR OUT bind.
async fn show_department_emps<C: Connection>(conn: &mut C, dept_no: i64) -> Result<()> {
    let result = conn
        .execute(
            OPEN_EMP_CURSOR_BLOCK,
            Params::Named(vec![
                ("emp_cur".to_string(), Bind::Out(SqlType::RefCursor)),
                ("dept_no".to_string(), Bind::In(SqlValue::from(dept_no))),
            ]),
        )
        .await?;
    let cursor = result
        .outs
        .first()
        .and_then(SqlValue::as_cursor)
        .cloned()
        .ok_or_else(|| Error::type_conversion("expected a REF CURSOR out bind"))?;

    let emps = conn.fetch_ref_cursor(cursor).await?;
    info!("Employees in department #{dept_no}:");
    for row in &emps {
        let details: Vec<String> = row
            .iter()
            .map(|value| {
                if value.is_null() {
                    "<NULL>".to_string()
                } else {
                    value.to_string()
                }
            })
            .collect();
        info!("{}", details.join(", "));
    }
    Ok(())
}

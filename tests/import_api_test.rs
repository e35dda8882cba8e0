// ==========================================
// 面粉厂生产计划系统 - 文件导入 API 集成测试
// ==========================================
// 表格读取以固定行集替身注入, 聚焦行映射/派生/级联语义
// ==========================================


use chrono::NaiveDate;
use flour_mill_planner::api::ApiError;
use flour_mill_planner::importer::headers;
use flour_mill_planner::ProductSpecification;
use std::path::Path;
use std::sync::Arc;
use test_helpers::{plan_input, raw_row, FailingParser, FixedRowsParser, TestEnv};

fn plan_row(product: &str, quantity: &str) -> flour_mill_planner::RawRow {
    raw_row(&[
        (headers::PRODUCT_NAME, product),
        (headers::QUANTITY_KG, quantity),
        (headers::START_DATE, "2024-01-01"),
        (headers::END_DATE, "2024-01-31"),
    ])
}

fn spec_row(product: &str, weight: &str) -> flour_mill_planner::RawRow {
    raw_row(&[
        (headers::PRODUCT_NAME, product),
        (headers::PACKAGE_WEIGHT_KG, weight),
    ])
}

#[tokio::test]
async fn test_spec_then_plan_import_round_trip() {
    let env = TestEnv::new();

    // 先导入规格文件
    let spec_api = env.import_api(Arc::new(FixedRowsParser {
        rows: vec![spec_row("Flour A", "25"), spec_row("Flour B", "50")],
    }));
    let spec_response = spec_api.import_spec_file(Path::new("specs.xlsx")).await.unwrap();
    assert_eq!(spec_response.imported, 2);
    assert!(spec_response.skipped.is_empty());

    // 再导入计划文件
    let plan_api = env.import_api(Arc::new(FixedRowsParser {
        rows: vec![plan_row("Flour A", "1000")],
    }));
    let plan_response = plan_api.import_plan_file(Path::new("plans.xlsx")).await.unwrap();
    assert_eq!(plan_response.imported, 1);

    let plans = env.plans.list().unwrap();
    assert_eq!(plans.len(), 1);
    assert_eq!(plans[0].package_weight_kg, Some(25.0));
    assert_eq!(plans[0].number_of_packages, Some(40));
    assert_eq!(
        plans[0].start_date,
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    );
}

#[tokio::test]
async fn test_invalid_rows_skipped_and_order_preserved() {
    let env = TestEnv::new();

    let api = env.import_api(Arc::new(FixedRowsParser {
        rows: vec![
            plan_row("Flour A", "100"),
            plan_row("Flour B", ""), // 缺数量, 应跳过
            plan_row("Flour C", "300"),
        ],
    }));
    let response = api.import_plan_file(Path::new("plans.xlsx")).await.unwrap();

    assert_eq!(response.imported, 2);
    assert_eq!(response.skipped.len(), 1);
    assert_eq!(response.skipped[0].row, 3);
    assert_eq!(response.skipped[0].field, headers::QUANTITY_KG);

    // 有效行保持源表行序
    let products: Vec<String> = env
        .plans
        .list()
        .unwrap()
        .iter()
        .map(|p| p.product_name.clone())
        .collect();
    assert_eq!(products, vec!["Flour A", "Flour C"]);
}

#[tokio::test]
async fn test_plan_import_replaces_existing_collection() {
    let env = TestEnv::new();
    env.plan_api.create(plan_input("手工计划", 500.0)).await.unwrap();

    let api = env.import_api(Arc::new(FixedRowsParser {
        rows: vec![plan_row("Flour A", "1000")],
    }));
    api.import_plan_file(Path::new("plans.xlsx")).await.unwrap();

    // 整体替换, 不是合并
    let plans = env.plans.list().unwrap();
    assert_eq!(plans.len(), 1);
    assert_eq!(plans[0].product_name, "Flour A");
}

#[tokio::test]
async fn test_spec_import_cascades_to_existing_plans() {
    let env = TestEnv::new();

    // 既有计划无匹配规格, 派生字段缺失
    let plan = env.plan_api.create(plan_input("Flour A", 1000.0)).await.unwrap();
    assert_eq!(plan.package_weight_kg, None);

    let api = env.import_api(Arc::new(FixedRowsParser {
        rows: vec![spec_row("Flour A", "25")],
    }));
    let response = api.import_spec_file(Path::new("specs.xlsx")).await.unwrap();
    assert_eq!(response.plans_refreshed, 1);

    // 不需重新导入计划, 派生字段已更新
    let plans = env.plans.list().unwrap();
    assert_eq!(plans[0].id, plan.id);
    assert_eq!(plans[0].package_weight_kg, Some(25.0));
    assert_eq!(plans[0].number_of_packages, Some(40));
}

#[tokio::test]
async fn test_spec_reimport_clears_stale_derived_fields() {
    let env = TestEnv::new();
    env.specs
        .replace_all(vec![ProductSpecification::new("Flour A", 25.0)])
        .await
        .unwrap();
    let plan = env.plan_api.create(plan_input("Flour A", 1000.0)).await.unwrap();
    assert_eq!(plan.number_of_packages, Some(40));

    // 新规格集合不再包含该产品
    let api = env.import_api(Arc::new(FixedRowsParser {
        rows: vec![spec_row("Flour B", "50")],
    }));
    api.import_spec_file(Path::new("specs.xlsx")).await.unwrap();

    let plans = env.plans.list().unwrap();
    assert_eq!(plans[0].package_weight_kg, None);
    assert_eq!(plans[0].number_of_packages, None);
}

#[tokio::test]
async fn test_decode_failure_fails_whole_import_without_mutation() {
    let env = TestEnv::new();
    env.plan_api.create(plan_input("Flour A", 500.0)).await.unwrap();

    let api = env.import_api(Arc::new(FailingParser));
    let result = api.import_plan_file(Path::new("corrupt.xlsx")).await;

    match result {
        Err(ApiError::ImportFileFailed { file, columns, .. }) => {
            assert_eq!(file, "corrupt.xlsx");
            assert!(columns.contains(headers::QUANTITY_KG));
        }
        other => panic!("期望容器级导入失败, 实际: {:?}", other.map(|r| r.imported)),
    }

    // 失败的导入不得触碰存储
    assert_eq!(env.plans.list().unwrap().len(), 1);
}

#[tokio::test]
async fn test_duplicate_spec_rows_kept_first_match_wins() {
    let env = TestEnv::new();
    env.plan_api.create(plan_input("Flour A", 1000.0)).await.unwrap();

    let api = env.import_api(Arc::new(FixedRowsParser {
        rows: vec![spec_row("Flour A", "25"), spec_row("Flour A", "50")],
    }));
    let response = api.import_spec_file(Path::new("specs.xlsx")).await.unwrap();

    // 导入不去重
    assert_eq!(response.imported, 2);
    assert_eq!(env.specs.list().unwrap().len(), 2);

    // 查找时首个匹配生效
    let found = env.specs.find_by_product("Flour A").unwrap().unwrap();
    assert_eq!(found.package_weight_kg, 25.0);

    let plans = env.plans.list().unwrap();
    assert_eq!(plans[0].package_weight_kg, Some(25.0));
}

// ==========================================
// 面粉厂生产计划系统 - 仓储与存储集成测试
// ==========================================
// JSON 文件后端的持久化往返 + 损坏数据恢复 + 设置单例
// ==========================================


use flour_mill_planner::repository::{PlanRepository, SettingsRepository};
use flour_mill_planner::storage::{keys, JsonFileStorage, MemoryStorage, StoragePort};
use flour_mill_planner::{AppState, MillSettings, PackerSettings};
use std::sync::Arc;
use test_helpers::{plan_input, TestEnv};

#[tokio::test]
async fn test_plans_survive_repository_restart() {
    let dir = tempfile::tempdir().unwrap();
    let port: Arc<dyn StoragePort> = Arc::new(JsonFileStorage::new(dir.path()).unwrap());

    // 第一个仓储实例写入
    {
        let repo = PlanRepository::new(Arc::clone(&port));
        let plan = flour_mill_planner::derive_plan(
            flour_mill_planner::PlanDraft {
                id: None,
                plan_name: Some("一月批次".to_string()),
                product_name: "Flour A".to_string(),
                flour_type: Some("All-Purpose".to_string()),
                quantity_kg: 1000.0,
                start_date: chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                end_date: chrono::NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
                status: None,
                notes: String::new(),
            },
            &[],
        );
        repo.add(plan).await.unwrap();
    }

    // 新实例从同一目录读取
    let reopened = PlanRepository::new(port);
    let outcome = reopened.load().await.unwrap();
    assert_eq!(outcome.loaded, 1);
    assert!(!outcome.recovered);

    let plans = reopened.list().unwrap();
    assert_eq!(plans.len(), 1);
    assert_eq!(plans[0].product_name, "Flour A");
}

#[tokio::test]
async fn test_corrupt_plan_record_recovers_to_empty() {
    let port = Arc::new(
        MemoryStorage::new().with_record(keys::PRODUCTION_PLANS, "{ 这不是合法的 JSON"),
    );

    let repo = PlanRepository::new(port);
    let outcome = repo.load().await.unwrap();

    assert!(outcome.recovered);
    assert_eq!(outcome.loaded, 0);
    assert!(repo.list().unwrap().is_empty());
}

#[tokio::test]
async fn test_corrupt_record_surfaces_load_notice() {
    let port: Arc<dyn StoragePort> = Arc::new(
        MemoryStorage::new()
            .with_record(keys::PRODUCTION_PLANS, "corrupt")
            .with_record(keys::MILL_SETTINGS, "also corrupt"),
    );

    let (state, report) = AppState::new(port).await.unwrap();

    // 两条损坏记录 → 两条可关闭提示, 应用继续以空/默认状态运行
    assert_eq!(report.notices.len(), 2);
    assert!(state.plan_api.list().unwrap().is_empty());
    assert_eq!(
        state.settings_api.mill_settings().unwrap(),
        MillSettings::default()
    );
}

#[tokio::test]
async fn test_settings_default_on_first_run_then_overwrite() {
    let dir = tempfile::tempdir().unwrap();
    let port: Arc<dyn StoragePort> = Arc::new(JsonFileStorage::new(dir.path()).unwrap());

    let repo = SettingsRepository::new(Arc::clone(&port));
    let outcome = repo.load().await.unwrap();
    assert_eq!(outcome.loaded, 0); // 首次运行无记录
    assert_eq!(repo.mill().unwrap(), MillSettings::default());

    // 整体覆盖保存
    let custom = MillSettings {
        number_of_mills: 4,
        wheat_per_mill_per_day_tonnes: 800.0,
        extraction_rate: 0.8,
    };
    repo.save_mill(custom.clone()).await.unwrap();

    // 新实例读取到覆盖后的值, 包装机参数仍为默认
    let reopened = SettingsRepository::new(port);
    let outcome = reopened.load().await.unwrap();
    assert_eq!(outcome.loaded, 1);
    assert_eq!(reopened.mill().unwrap(), custom);
    assert_eq!(reopened.packer().unwrap(), PackerSettings::default());
}

#[tokio::test]
async fn test_capacity_summary_follows_saved_settings() {
    let env = TestEnv::new();

    env.settings_api
        .save_mill_settings(MillSettings {
            number_of_mills: 3,
            wheat_per_mill_per_day_tonnes: 500.0,
            extraction_rate: 0.8,
        })
        .await
        .unwrap();
    env.settings_api
        .save_packer_settings(PackerSettings {
            number_of_packers: 1,
            capacity_per_packer_kg_per_day: 10000.0,
        })
        .await
        .unwrap();

    let summary = env.settings_api.capacity_summary().unwrap();
    assert_eq!(summary.daily_wheat_capacity_tonnes, 1500.0);
    assert_eq!(summary.daily_flour_capacity_tonnes, 1200.0);
    assert_eq!(summary.daily_packing_capacity_kg, 10000.0);
}

#[tokio::test]
async fn test_every_mutation_persists_full_collection() {
    let port = Arc::new(MemoryStorage::new());
    let env = TestEnv::with_port(Arc::clone(&port));

    let plan = env.plan_api.create(plan_input("Flour A", 1000.0)).await.unwrap();

    // 变更返回后存储中立即可见完整集合
    let payload = port.load(keys::PRODUCTION_PLANS).await.unwrap().unwrap();
    assert!(payload.contains(&plan.id));

    env.plan_api.delete(&plan.id).await.unwrap();
    let payload = port.load(keys::PRODUCTION_PLANS).await.unwrap().unwrap();
    assert_eq!(payload, "[]");
}

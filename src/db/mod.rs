//! MongoDB 데이터베이스 연결 관리
//!
//! `users`, `boards`, `counters` 컬렉션이 저장되는 데이터베이스 핸들을 제공합니다.
//! `ServiceLocator::set()`으로 등록되어 모든 리포지토리에 주입됩니다.
//!
//! # Environment Variables
//!
//! * `MONGODB_URI` - 연결 문자열 (기본값: `mongodb://localhost:27017`)
//! * `DATABASE_NAME` - 데이터베이스 이름 (기본값: `social_board_dev`)

use mongodb::{Client, options::ClientOptions};
use std::env;
use log::info;

#[derive(Clone)]
pub struct Database {
    client: Client,
    database_name: String,
}

impl Database {
    /// 연결을 생성하고 `ping`으로 가용성을 확인합니다.
    pub async fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let mongodb_uri = env::var("MONGODB_URI")
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());

        let database_name = env::var("DATABASE_NAME")
            .unwrap_or_else(|_| "social_board_dev".to_string());

        let mut client_options = ClientOptions::parse(&mongodb_uri).await?;
        client_options.app_name = Some("social_board".to_string());

        let client = Client::with_options(client_options)?;
        let database = Self {
            client,
            database_name,
        };

        database.ping().await?;
        info!("✅ MongoDB 연결 성공: {}", database.database_name);

        Ok(database)
    }

    pub async fn ping(&self) -> Result<(), mongodb::error::Error> {
        self.get_database()
            .run_command(mongodb::bson::doc! { "ping": 1 })
            .await
            .map(|_| ())
    }

    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }

    pub fn database_name(&self) -> &str {
        &self.database_name
    }
}

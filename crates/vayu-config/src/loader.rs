use anyhow::{anyhow, Result};
use config::{Config, File, FileFormat};
use std::path::{Path, PathBuf};

use crate::SimulationConfig;

/// 配置加载器
pub struct ConfigLoader {
    config_dir: PathBuf,
}

impl ConfigLoader {
    /// 创建配置加载器
    pub fn new<P: AsRef<Path>>(config_dir: P) -> Self {
        Self {
            config_dir: config_dir.as_ref().to_path_buf(),
        }
    }

    /// 加载模拟配置
    ///
    /// 配置文件不存在时返回默认配置
    pub fn load(&self) -> Result<SimulationConfig> {
        let config_path = self.config_dir.join("vayu.toml");

        if !config_path.exists() {
            return Ok(SimulationConfig::default());
        }

        let config = Config::builder()
            .add_source(File::new(
                config_path
                    .to_str()
                    .ok_or_else(|| anyhow!("Invalid config path"))?,
                FileFormat::Toml,
            ))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// 写出当前配置（可用于生成样例文件）
    pub fn save(&self, config: &SimulationConfig) -> Result<()> {
        let config_path = self.config_dir.join("vayu.toml");
        let contents = toml::to_string_pretty(config)?;
        std::fs::write(&config_path, contents)?;
        Ok(())
    }
}

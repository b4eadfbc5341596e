//! 产品建议管线 - 校验 → 调研 → 合成三阶段的核心实现

pub mod capability;
pub mod context;
pub mod orchestrator;
pub mod stage;
pub mod stages;
pub mod types;
pub mod workflow;

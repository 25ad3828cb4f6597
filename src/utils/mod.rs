//! # 常用接口模块
//!
//! 本模块提供单元测试、集成测试共用的断言宏

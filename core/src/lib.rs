// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

pub mod collector;
pub mod config;
pub mod deadline_signal;
pub mod latency_sampler;
pub mod result_channel;
pub mod worker;
pub mod worker_runtime;

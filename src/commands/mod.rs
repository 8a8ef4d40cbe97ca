// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod accounts;
pub mod backup;
pub mod exporter;
pub mod history;
pub mod sessions;
pub mod stats;
pub mod transfer;

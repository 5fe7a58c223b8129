// src/tools/lxc.rs

//! The LXC container toolset.
//!
//! ```
//! use shellstack::tools::lxc::Lxc;
//!
//! let mut stop = Lxc::stop("container-name");
//! stop.reboot().no_wait();
//! ```

use crate::stack::{CommandStack, Concat};
use crate::tools::Tool;

/// Entry points to the LXC commands.
pub struct Lxc;

impl Lxc {
    pub fn start(container_name: &str) -> Start {
        Start::new(container_name)
    }

    pub fn attach(container_name: &str) -> Attach {
        Attach::new(container_name, "/root")
    }

    pub fn stop(container_name: &str) -> Stop {
        Stop::new(container_name)
    }

    pub fn info(container_name: &str) -> Info {
        Info::new(container_name)
    }

    pub fn destroy(container_name: &str) -> Destroy {
        Destroy::new(container_name)
    }
}

fn lxc_stack(executable: &str, container_name: &str) -> CommandStack {
    let mut stack = CommandStack::new();
    stack.set_executable(executable);
    stack.add_option("-n", &format!("'{container_name}'"), Concat::Space);
    stack
}

/// `lxc-start`: run an application inside a container.
#[derive(Debug, Clone)]
pub struct Start {
    stack: CommandStack,
}

impl Start {
    pub fn new(container_name: &str) -> Self {
        Start {
            stack: lxc_stack("lxc-start", container_name),
        }
    }

    /// Run the container as a daemon. With no tty attached, errors only
    /// show up in the log file.
    pub fn daemon(&mut self) -> &mut Self {
        self.stack.add_option("-d", "", Concat::Space);
        self
    }

    /// Run the container in the foreground (the default mode).
    pub fn foreground(&mut self) -> &mut Self {
        self.stack.add_option("-F", "", Concat::Space);
        self
    }

    /// Create a file with the process id.
    pub fn pid_file(&mut self, pid_file: &str) -> &mut Self {
        self.stack.add_option("-p", pid_file, Concat::Space);
        self
    }

    /// Configuration file for the container's virtualisation and isolation,
    /// used even when the container already has one.
    pub fn rc_file(&mut self, config_file: &str) -> &mut Self {
        self.stack.add_option("-f", config_file, Concat::Space);
        self
    }

    /// Device to use for the container's console, e.g. `/dev/tty8`.
    pub fn console(&mut self, console_device: &str) -> &mut Self {
        self.stack.add_option("-c", console_device, Concat::Space);
        self
    }
}

impl Tool for Start {
    fn stack(&self) -> &CommandStack {
        &self.stack
    }

    fn stack_mut(&mut self) -> &mut CommandStack {
        &mut self.stack
    }
}

/// `lxc-stop`: reboot, cleanly shut down, or kill everything inside a
/// container.
#[derive(Debug, Clone)]
pub struct Stop {
    stack: CommandStack,
}

impl Stop {
    pub fn new(container_name: &str) -> Self {
        Stop {
            stack: lxc_stack("lxc-stop", container_name),
        }
    }

    /// Perform the requested action and exit immediately.
    pub fn no_wait(&mut self) -> &mut Self {
        self.stack.add_option("-W", "", Concat::Space);
        self
    }

    /// Request a reboot of the container.
    pub fn reboot(&mut self) -> &mut Self {
        self.stack.add_option("-r", "", Concat::Space);
        self
    }

    /// Wait `seconds` before hard-stopping the container.
    pub fn timeout(&mut self, seconds: u32) -> &mut Self {
        self.stack
            .add_option("-t", &seconds.to_string(), Concat::Space);
        self
    }

    /// Explicitly kill all tasks in the container instead of requesting a
    /// clean shutdown.
    pub fn kill(&mut self) -> &mut Self {
        self.stack.add_option("-k", "", Concat::Space);
        self
    }

    /// Only request a clean shutdown; never fall back to killing tasks.
    pub fn no_kill(&mut self) -> &mut Self {
        self.stack.add_option("--nokill", "", Concat::Space);
        self
    }

    /// Skip the LXC API locking. Only for hangs caused by a bad system
    /// state.
    pub fn no_lock(&mut self) -> &mut Self {
        self.stack.add_option("--nolock", "", Concat::Space);
        self
    }
}

impl Tool for Stop {
    fn stack(&self) -> &CommandStack {
        &self.stack
    }

    fn stack_mut(&mut self) -> &mut CommandStack {
        &mut self.stack
    }
}

/// `lxc-attach`: start a process inside a running container.
#[derive(Debug, Clone)]
pub struct Attach {
    stack: CommandStack,
    container: Vec<String>,
}

impl Attach {
    /// `home_dir` is exported as `HOME` inside the container; some tools
    /// (composer, notably) refuse to run without one.
    pub fn new(container_name: &str, home_dir: &str) -> Self {
        let mut stack = CommandStack::new();
        stack.set_executable("lxc-attach");
        Attach {
            stack,
            container: vec![
                "-n".to_string(),
                format!("'{container_name}'"),
                "-v".to_string(),
                format!("\"HOME={home_dir}\""),
            ],
        }
    }

    /// Execute the given command(s) inside the container, each as its own
    /// stacked `lxc-attach` call.
    pub fn execute(&mut self, commands: &[&str], wrap_in_bash: bool) -> &mut Self {
        for command in commands {
            let command = if wrap_in_bash {
                format!("bash -c '{}'", command.replace('\'', r"'\''"))
            } else {
                (*command).to_string()
            };
            let mut tokens = self.container.clone();
            tokens.push("--".to_string());
            tokens.push(command);
            self.stack.push_to_stack(tokens, false, None, &[]);
        }
        self
    }
}

impl Tool for Attach {
    fn stack(&self) -> &CommandStack {
        &self.stack
    }

    fn stack_mut(&mut self) -> &mut CommandStack {
        &mut self.stack
    }
}

/// `lxc-info`: query information about a container.
#[derive(Debug, Clone)]
pub struct Info {
    stack: CommandStack,
}

impl Info {
    pub fn new(container_name: &str) -> Self {
        Info {
            stack: lxc_stack("lxc-info", container_name),
        }
    }

    /// Just print the container's state.
    pub fn status(&mut self) -> &mut Self {
        self.stack.add_option("-s", "", Concat::Space);
        self
    }

    /// Just print the container's pid.
    pub fn pid(&mut self) -> &mut Self {
        self.stack.add_option("-p", "", Concat::Space);
        self
    }

    /// Just print the container's IP addresses.
    pub fn ip(&mut self) -> &mut Self {
        self.stack.add_option("-i", "", Concat::Space);
        self
    }

    /// Just print the container's statistics. Kernel memory shows as 0
    /// unless a kernel memory limit is configured.
    pub fn stats(&mut self) -> &mut Self {
        self.stack.add_option("-S", "", Concat::Space);
        self
    }

    /// Print statistics in raw, non-humanized form.
    pub fn stats_raw(&mut self) -> &mut Self {
        self.stack.add_option("-H", "", Concat::Space);
        self
    }
}

impl Tool for Info {
    fn stack(&self) -> &CommandStack {
        &self.stack
    }

    fn stack_mut(&mut self) -> &mut CommandStack {
        &mut self.stack
    }
}

/// `lxc-destroy`: destroy a container created earlier.
#[derive(Debug, Clone)]
pub struct Destroy {
    stack: CommandStack,
}

impl Destroy {
    pub fn new(container_name: &str) -> Self {
        Destroy {
            stack: lxc_stack("lxc-destroy", container_name),
        }
    }

    /// Perform the action and exit, without waiting.
    pub fn force(&mut self) -> &mut Self {
        self.stack.add_option("-f", "", Concat::Space);
        self
    }
}

impl Tool for Destroy {
    fn stack(&self) -> &CommandStack {
        &self.stack
    }

    fn stack_mut(&mut self) -> &mut CommandStack {
        &mut self.stack
    }
}

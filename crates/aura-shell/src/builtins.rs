//! Fixed output tables for the simulated commands.
//!
//! These are script, not state: every line is literal text, templated at
//! most with the session clock or an argument.

pub(crate) const HELP: &[&str] = &[
    "Available commands:",
    "",
    "  Navigation:",
    "    ls          - List directory contents",
    "    ls -la      - List with details",
    "    cd <dir>    - Change directory",
    "    pwd         - Print working directory",
    "    tree        - Show directory tree",
    "",
    "  File Operations:",
    "    cat <file>  - Display file content",
    "    touch <f>   - Create empty file",
    "    mkdir <d>   - Create directory",
    "    rm <file>   - Remove file (simulated)",
    "    cp <s> <d>  - Copy file (simulated)",
    "",
    "  System Info:",
    "    neofetch    - System information with ASCII art",
    "    uname -a    - System information",
    "    whoami      - Display current user",
    "    hostname    - Display hostname",
    "    uptime      - System uptime",
    "    date        - Current date/time",
    "    df -h       - Disk space",
    "    free -h     - Memory usage",
    "    lscpu       - CPU information",
    "    top         - Process overview",
    "",
    "  Applications:",
    "    open <app>  - Launch application",
    "    xdg-open    - Same as open",
    "",
    "  Utilities:",
    "    echo <text> - Print text",
    "    grep <p> <f>- Search in file",
    "    history     - Command history",
    "    alias       - Show aliases",
    "    man <cmd>   - Manual page",
    "    clear       - Clear terminal",
    "    exit        - Close terminal",
    "",
    "  Fun:",
    "    sudo <cmd>  - Run as superuser",
    "    sl          - Steam Locomotive",
    "    cowsay <t>  - Cow says...",
    "    fortune     - Fortune cookie",
    "    cmatrix     - Matrix rain (simulated)",
    "",
];

pub(crate) const NEOFETCH_ART: &[&str] = &[
    "          .-/+oossssoo+/-.",
    "      `:+ssssssssssssssssss+:`",
    "    -+ssssssssssssssssssyyssss+-",
    "  .ossssssssssssssssssdMMMNysssso.",
    " /ssssssssssshdmmNNmmyNMMMMhssssss/",
    "+sssssssssshmydMMMMMMMNddddyssssssss+",
    "/sssssssshNMMMyhhyyyyhmNMMMNhssssssss/",
    ".ssssssssdMMMNhsssssssssshNMMMdssssssss.",
    "+sssshhhyNMMNyssssssssssssyNMMMysssssss+",
    "ossyNMMMNyMMhsssssssssssssshmmmhssssssso",
    "ossyNMMMNyMMhsssssssssssssssmhssssssso",
    "+sssshhhyNMMNyssssssssssssyNMMMysssssss+",
    ".ssssssssdMMMNhsssssssssshNMMMdssssssss.",
    "/sssssssshNMMMyhhyyyyhdNMMMNhssssssss/",
    "+sssssssssdmydMMMMMMMMddddyssssssss+",
    " /ssssssssssshdmNNNNmyNMMMMhssssss/",
    "  .ossssssssssssssssssdMMMNysssso.",
    "    -+sssssssssssssssssyysssss+-",
    "      `:+ssssssssssssssssss+:`",
    "          .-/+oossssoo+/-.",
];

pub(crate) const NEOFETCH_INFO: &[&str] = &[
    "aman@linux-aura",
    "-----------------",
    "OS: Linux Aura OS 2.0.4 x86_64",
    "Host: Portfolio Machine",
    "Kernel: 6.8.0-31-generic",
    "Uptime: 4 hours, 12 mins",
    "Packages: 2847 (apt), 42 (snap)",
    "Shell: bash 5.2.15",
    "Resolution: 3840x2160",
    "DE: GNOME 46.2",
    "WM: Mutter",
    "WM Theme: Catppuccin-Mocha",
    "Theme: Adw-dark [GTK3]",
    "Icons: Papirus-Dark",
    "Terminal: linux-aura-terminal",
    "CPU: Intel i9-14900K (24) @ 5.80GHz",
    "GPU: NVIDIA RTX 4090",
    "Memory: 27614MiB / 65536MiB",
];

pub(crate) const FREE: &[&str] = &[
    "              total        used        free      shared  buff/cache   available",
    "Mem:       65536000    27614000    22456000     1234000    15466000    36200000",
    "Swap:      16777216     2013184    14764032",
];

pub(crate) const DF: &[&str] = &[
    "Filesystem      Size  Used Avail Use% Mounted on",
    "/dev/nvme0n1p2  1.8T  944G  856G  53% /",
    "tmpfs            32G  832M   31G   3% /tmp",
    "/dev/nvme0n1p1  512M   32M  480M   7% /boot/efi",
    "/dev/sda1       4.0T  1.9T  2.1T  48% /mnt/data",
];

pub(crate) const LSCPU: &[&str] = &[
    "Architecture:            x86_64",
    "CPU op-mode(s):          32-bit, 64-bit",
    "Byte Order:              Little Endian",
    "CPU(s):                  24",
    "Thread(s) per core:      2",
    "Core(s) per socket:      16",
    "Socket(s):               1",
    "Model name:              Intel(R) Core(TM) i9-14900K",
    "CPU MHz:                 5800.000",
    "CPU max MHz:             5800.0000",
    "L1d cache:               640 KiB",
    "L2 cache:                24 MiB",
    "L3 cache:                36 MiB",
];

pub(crate) const TOP_BODY: &[&str] = &[
    "Tasks: 247 total,   2 running, 245 sleeping,   0 stopped,   0 zombie",
    "%Cpu(s):  12.3 us,  3.2 sy,  0.0 ni, 82.1 id,  1.8 wa,  0.0 hi,  0.6 si",
    "MiB Mem :  64000.0 total,  22456.0 free,  27614.0 used,  15466.0 buff/cache",
    "MiB Swap:  16384.0 total,  14764.0 free,   2013.2 used.  36200.0 avail Mem",
    "",
    "  PID USER      PR  NI    VIRT    RES    SHR S  %CPU  %MEM     TIME+ COMMAND",
    "  567 aman      20   0 4.321g 567.8m  98.2m S  12.3   8.7   2:34.56 firefox",
    "  678 aman      20   0 2.147g 412.3m  67.5m S   8.1   6.3   1:45.23 code",
    "  456 aman      20   0 1.856g 274.2m  45.8m S   5.4   4.2   3:12.78 gnome-shell",
    "  789 aman      20   0  856.4m 201.5m  34.2m S   4.5   3.1   0:56.34 node",
    "  234 root      20   0  456.7m 117.8m  67.4m S   3.2   1.8   4:23.91 Xorg",
    " 1011 root      20   0  721.3m 182.4m  42.1m S   2.1   2.8   0:34.67 docker",
    " 1122 postgres  20   0  312.8m 123.6m  28.9m S   1.4   1.9   0:45.12 postgres",
];

pub(crate) const ALIASES: &[&str] = &[
    "alias ll='ls -la'",
    "alias la='ls -A'",
    "alias l='ls -CF'",
    "alias gs='git status'",
    "alias gc='git commit'",
    "alias gp='git push'",
    "alias vim='nvim'",
    "alias python='python3'",
];

pub(crate) const ENV: &[&str] = &[
    "SHELL=/bin/bash",
    "USER=aman",
    "HOME=/home/aman",
    "LANG=en_US.UTF-8",
    "TERM=xterm-256color",
    "PATH=/usr/local/sbin:/usr/local/bin:/usr/sbin:/usr/bin:/sbin:/bin",
    "DISPLAY=:0",
    "XDG_SESSION_TYPE=x11",
    "DESKTOP_SESSION=gnome",
    "GTK_THEME=Adw:dark",
    "EDITOR=nvim",
];

pub(crate) const SL_TRAIN: &[&str] = &[
    "      ====        ________                ___________",
    "  _D _|  |_______/        \\__I_I_____===__|_________|",
    "   |(_)---  |   H\\________/ |   |        =|___ ___|  ",
    "   /     |  |   H  |  |     |   |         ||_| |_||  ",
    "  |      |  |   H  |__--------------------| [___] |  ",
    "  | ________|___H__/__|_____/[][]~\\_______|       |  ",
    "  |/ |   |-----------I_____I [][] []  D   |=======|__",
    "        Choo Choo!",
];

pub(crate) const COW: &[&str] = &[
    "        \\   ^__^",
    "         \\  (oo)\\_______",
    "            (__)\\       )\\/\\",
    "                ||----w |",
    "                ||     ||",
];

pub(crate) const FORTUNES: &[&str] = &[
    "\"The best way to predict the future is to create it.\" - Peter Drucker",
    "\"Code is like humor. When you have to explain it, it's bad.\" - Cory House",
    "\"First, solve the problem. Then, write the code.\" - John Johnson",
    "\"Programming isn't about what you know; it's about what you can figure out.\" - Chris Pine",
    "\"The only way to learn a new programming language is by writing programs in it.\" - Dennis Ritchie",
    "\"Talk is cheap. Show me the code.\" - Linus Torvalds",
    "\"Any fool can write code that a computer can understand. Good programmers write code that humans can understand.\" - Martin Fowler",
];

pub(crate) const ID_LINE: &str = "uid=1000(aman) gid=1000(aman) groups=1000(aman),4(adm),24(cdrom),27(sudo),30(dip),46(plugdev),100(users),118(docker)";

pub(crate) const UNAME_FULL: &str =
    "Linux linux-aura 6.8.0-31-generic #31-Ubuntu SMP PREEMPT_DYNAMIC x86_64 GNU/Linux";

pub(crate) const UNAME_RELEASE: &str = "6.8.0-31-generic";
